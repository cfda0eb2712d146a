use std::collections::HashSet;

use crate::error::ExportError;
use crate::import_block::ImportBlock;

/// Checks that names and IDs are unique within each resource type.
///
/// Reports the first collision in input order. Blocks of different
/// resource types may share names or IDs.
pub fn validate_unique(blocks: &[ImportBlock]) -> Result<(), ExportError> {
    let mut names: HashSet<(&str, &str)> = HashSet::with_capacity(blocks.len());
    let mut ids: HashSet<(&str, &str)> = HashSet::with_capacity(blocks.len());

    for block in blocks {
        if !names.insert((block.resource_type(), block.resource_name())) {
            return Err(ExportError::DuplicateResourceName {
                resource_type: block.resource_type().to_string(),
                resource_name: block.resource_name().to_string(),
            });
        }
        if !ids.insert((block.resource_type(), block.resource_id())) {
            return Err(ExportError::DuplicateResourceId {
                resource_type: block.resource_type().to_string(),
                resource_id: block.resource_id().to_string(),
            });
        }
    }

    Ok(())
}
