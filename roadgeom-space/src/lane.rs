use crate::attributes::AttributeList;
use roadgeom_function::UnivariateFunction;
use std::sync::Arc;

/// A single lane within a lane section: its width function and height
/// offsets along its own `s_offset` domain, flattening flag, and
/// attributes.
#[derive(Clone)]
pub struct Lane {
    id: i32,
    width: Arc<dyn UnivariateFunction + Send + Sync>,
    inner_height_offset: Arc<dyn UnivariateFunction + Send + Sync>,
    outer_height_offset: Arc<dyn UnivariateFunction + Send + Sync>,
    level: bool,
    attributes: AttributeList,
}

impl std::fmt::Debug for Lane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lane").field("id", &self.id).field("level", &self.level).finish()
    }
}

impl Lane {
    /// Builds a lane from its id, width function, height-offset functions,
    /// flattening flag, and attributes.
    pub fn new(
        id: i32,
        width: Arc<dyn UnivariateFunction + Send + Sync>,
        inner_height_offset: Arc<dyn UnivariateFunction + Send + Sync>,
        outer_height_offset: Arc<dyn UnivariateFunction + Send + Sync>,
        level: bool,
        attributes: AttributeList,
    ) -> Self {
        Lane { id, width, inner_height_offset, outer_height_offset, level, attributes }
    }

    /// The lane's signed id within its section (never 0).
    pub fn id(&self) -> i32 {
        self.id
    }

    /// The lane's width as a function of its section-local `s_offset`.
    pub fn width(&self) -> &Arc<dyn UnivariateFunction + Send + Sync> {
        &self.width
    }

    /// The lane's inner-edge height offset.
    pub fn inner_height_offset(&self) -> &Arc<dyn UnivariateFunction + Send + Sync> {
        &self.inner_height_offset
    }

    /// The lane's outer-edge height offset.
    pub fn outer_height_offset(&self) -> &Arc<dyn UnivariateFunction + Send + Sync> {
        &self.outer_height_offset
    }

    /// Whether this lane is flattened (no superelevation torsion applied).
    pub fn level(&self) -> bool {
        self.level
    }

    /// This lane's attributes.
    pub fn attributes(&self) -> &AttributeList {
        &self.attributes
    }
}
