//! Kinds operation - the naming registrations.

use ngsuffix_schematics::ArtifactKind;

use crate::reports::{KindRow, KindsReport};

pub fn kinds() -> KindsReport {
    let kinds = ArtifactKind::ALL
        .iter()
        .map(|kind| KindRow {
            name: kind.name(),
            file_suffix: kind.file_suffix(),
            symbol_suffix: kind.symbol_suffix(),
            classification: kind.classification().to_string(),
        })
        .collect();

    KindsReport { kinds }
}
