//! Static lookup tables consumed by the composer.
//!
//! These are data, not logic. Callers override them through
//! [`ConfigComposer::with_tables`](crate::ConfigComposer::with_tables).

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Extensions handled by the syntax-lowering stage (parser defaults plus TypeScript).
pub const DEFAULT_EXTENSIONS: [&str; 7] = [".js", ".jsx", ".es6", ".mjs", ".cjs", ".ts", ".tsx"];

/// A module-name rewrite applied during syntax lowering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReplacement {
    pub original: String,
    pub replacement: String,
}

impl ImportReplacement {
    pub fn new(original: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            replacement: replacement.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposerTables {
    /// Module id to the global identifier a UMD consumer provides
    pub globals: IndexMap<String, String>,

    /// Dependencies that are never bundled
    pub external: BTreeSet<String>,

    /// Heavier imports swapped for drop-in equivalents
    pub import_replacements: Vec<ImportReplacement>,

    pub extensions: Vec<String>,
}

impl ComposerTables {
    pub fn with_global(mut self, module: impl Into<String>, global: impl Into<String>) -> Self {
        self.globals.insert(module.into(), global.into());
        self
    }

    pub fn with_external(mut self, module: impl Into<String>) -> Self {
        self.external.insert(module.into());
        self
    }

    pub fn with_replacement(mut self, replacement: ImportReplacement) -> Self {
        self.import_replacements.push(replacement);
        self
    }
}

impl Default for ComposerTables {
    fn default() -> Self {
        let mut globals = IndexMap::new();
        globals.insert("react".to_string(), "React".to_string());
        globals.insert("react-native".to_string(), "ReactNative".to_string());

        Self {
            globals,
            external: ["react", "react-native"]
                .into_iter()
                .map(String::from)
                .collect(),
            import_replacements: vec![ImportReplacement::new("lodash", "lodash-es")],
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        }
    }
}
