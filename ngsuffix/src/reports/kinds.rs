//! Kinds command report.

use super::output::{Output, Report};

#[derive(Debug)]
pub struct KindRow {
    pub name: &'static str,
    pub file_suffix: &'static str,
    pub symbol_suffix: &'static str,
    pub classification: String,
}

#[derive(Debug)]
pub struct KindsReport {
    pub kinds: Vec<KindRow>,
}

impl Report for KindsReport {
    fn render(&self, out: &mut dyn Output) {
        out.section(&format!("Kinds ({})", self.kinds.len()));
        for kind in &self.kinds {
            out.list_item(&format!(
                "{:<12} <name>.{:<12} <Name>{:<12} {}",
                kind.name, kind.file_suffix, kind.symbol_suffix, kind.classification
            ));
        }
    }
}
