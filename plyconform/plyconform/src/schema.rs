use plyconform_core::{Header, Schema};

/// Output schema donated by a reference header: its `vertex` properties,
/// unchanged and in declaration order.
pub fn schema_from_reference(header: &Header) -> Schema {
    Schema::new(header.vertex_properties.clone())
}
