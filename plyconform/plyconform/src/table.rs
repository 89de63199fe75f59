use std::collections::HashMap;

/// Columns keyed by property name, every value widened to `f32`.
pub type Columns = HashMap<String, Vec<f32>>;

/// Decoded `vertex` element: one dense column per scalar property.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VertexTable {
    vertex_count: usize,
    columns: Columns,
}

impl VertexTable {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            columns: HashMap::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn column(&self, name: &str) -> Option<&[f32]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Insert or replace a column, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, column: Vec<f32>) -> Option<Vec<f32>> {
        self.columns.insert(name.into(), column)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    pub fn into_columns(self) -> Columns {
        self.columns
    }
}
