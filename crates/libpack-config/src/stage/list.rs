use serde::Serialize;

use super::{Stage, StageKind};

/// Ordered sequence of configured stages.
///
/// Kinds are strictly increasing, so each kind appears at most once and
/// relative order never changes. A stage that does not apply is absent;
/// there is no disabled placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StageList(Vec<Stage>);

impl StageList {
    pub fn builder() -> StageListBuilder {
        StageListBuilder::default()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stage> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn kinds(&self) -> Vec<StageKind> {
        self.0.iter().map(Stage::kind).collect()
    }

    pub fn get(&self, kind: StageKind) -> Option<&Stage> {
        self.0.iter().find(|stage| stage.kind() == kind)
    }

    pub fn contains(&self, kind: StageKind) -> bool {
        self.get(kind).is_some()
    }
}

impl<'a> IntoIterator for &'a StageList {
    type Item = &'a Stage;
    type IntoIter = std::slice::Iter<'a, Stage>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Appends stages in pipeline order, each one only when its predicate holds.
///
/// # Example
///
/// ```
/// use libpack_config::{JsonOptions, SourceMapsOptions, Stage, StageKind, StageList};
///
/// let list = StageList::builder()
///     .always(Stage::Json(JsonOptions::default()))
///     .when(false, || Stage::SourceMaps(SourceMapsOptions::default()))
///     .build();
///
/// assert_eq!(list.kinds(), vec![StageKind::Json]);
/// ```
#[derive(Debug, Default)]
pub struct StageListBuilder {
    stages: Vec<Stage>,
}

impl StageListBuilder {
    pub fn always(self, stage: Stage) -> Self {
        self.push(stage)
    }

    /// `stage` is only constructed when `include` is true.
    pub fn when(self, include: bool, stage: impl FnOnce() -> Stage) -> Self {
        if include { self.push(stage()) } else { self }
    }

    pub fn build(self) -> StageList {
        StageList(self.stages)
    }

    fn push(mut self, stage: Stage) -> Self {
        debug_assert!(
            self.stages
                .last()
                .is_none_or(|last| last.kind() < stage.kind()),
            "stage {} appended out of pipeline order",
            stage.kind()
        );
        self.stages.push(stage);
        self
    }
}
