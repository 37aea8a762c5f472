use build_core::{v1alpha1, v1beta1};

/// Build volume descriptions have no v1beta1 counterpart.
pub fn build_into_v1beta1(volumes: Vec<v1alpha1::BuildVolume>) -> Vec<v1beta1::BuildVolume> {
    volumes
        .into_iter()
        .map(|volume| v1beta1::BuildVolume {
            volume: volume.volume,
        })
        .collect()
}

pub fn build_into_v1alpha1(volumes: Vec<v1beta1::BuildVolume>) -> Vec<v1alpha1::BuildVolume> {
    volumes
        .into_iter()
        .map(|volume| v1alpha1::BuildVolume {
            description: None,
            volume: volume.volume,
        })
        .collect()
}

/// Strategy volumes always carry a description; the volume name stands in
/// when none was given.
pub fn strategy_into_v1beta1(
    volumes: Vec<v1alpha1::BuildStrategyVolume>,
) -> Vec<v1beta1::BuildStrategyVolume> {
    volumes
        .into_iter()
        .map(|volume| v1beta1::BuildStrategyVolume {
            overridable: volume.overridable,
            description: Some(volume.description.unwrap_or_else(|| volume.volume.name.clone())),
            volume: volume.volume,
        })
        .collect()
}

pub fn strategy_into_v1alpha1(
    volumes: Vec<v1beta1::BuildStrategyVolume>,
) -> Vec<v1alpha1::BuildStrategyVolume> {
    volumes
        .into_iter()
        .map(|volume| v1alpha1::BuildStrategyVolume {
            overridable: volume.overridable,
            description: Some(volume.description.unwrap_or_else(|| volume.volume.name.clone())),
            volume: volume.volume,
        })
        .collect()
}
