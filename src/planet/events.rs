use bevy::prelude::*;
use shapegen::settings::FilterType;

#[derive(Message)]
pub struct AddNoiseLayerEvent {
    pub filter_type: FilterType,
}

#[derive(Message)]
pub struct GenerateNewSeedEvent;

#[derive(Message)]
pub struct SavePresetEvent;

#[derive(Message)]
pub struct LoadPresetEvent;

#[derive(Message)]
pub struct ReloadConfigEvent;
