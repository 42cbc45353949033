use super::{MapperMetadata, ARRAY};
use crate::Config;
use automap_core::{Error, Result, Schema};

/// Creates metadata for pairs that were never registered.
#[derive(Debug, Clone)]
pub struct MetadataFactory {
    class_prefix: String,
    attribute_checking: bool,
    date_time_format: String,
}

impl MetadataFactory {
    pub fn new(config: &Config) -> MetadataFactory {
        MetadataFactory {
            class_prefix: config.class_prefix.clone(),
            attribute_checking: config.attribute_checking,
            date_time_format: config.date_time_format.clone(),
        }
    }

    /// Describes the mapper from `source` to `target`.
    ///
    /// Fails with "no mapping found" when both sides are arrays, and with an
    /// invalid schema error when a class is not declared.
    pub fn create(&self, schema: &Schema, source: &str, target: &str) -> Result<MapperMetadata> {
        if source == ARRAY && target == ARRAY {
            return Err(Error::no_mapping_found(source, target));
        }

        if source != ARRAY {
            schema.class(source)?;
        }

        let target_readonly = if target != ARRAY {
            schema.class(target)?.readonly
        } else {
            false
        };

        let mut metadata = MapperMetadata::new(source, target, &self.class_prefix);
        metadata
            .set_target_readonly(target_readonly)
            .set_attribute_checking(self.attribute_checking)
            .set_date_time_format(&self.date_time_format);

        Ok(metadata)
    }
}
