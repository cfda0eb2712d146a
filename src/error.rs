use thiserror::Error;

/// A batch of import blocks broke the uniqueness contract.
///
/// Raised when extraction logic feeds colliding names or IDs into one
/// resource type's batch. The sanitizer itself never fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("duplicate resource name '{resource_name}' for {resource_type}")]
    DuplicateResourceName {
        resource_type: String,
        resource_name: String,
    },

    #[error("duplicate resource id '{resource_id}' for {resource_type}")]
    DuplicateResourceId {
        resource_type: String,
        resource_id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_name_display() {
        let err = ExportError::DuplicateResourceName {
            resource_type: "pingfederate_oauth_client".to_string(),
            resource_name: "pingcli__Customer".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "duplicate resource name 'pingcli__Customer' for pingfederate_oauth_client"
        );
    }

    #[test]
    fn test_duplicate_id_display() {
        let err = ExportError::DuplicateResourceId {
            resource_type: "pingone_group".to_string(),
            resource_id: "env/grp".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "duplicate resource id 'env/grp' for pingone_group"
        );
    }
}
