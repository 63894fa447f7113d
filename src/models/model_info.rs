//! ModelInfo value describing a generated model.

use serde::{Deserialize, Serialize};

use super::MutantType;

/// Immutable metadata about a generated model artifact.
///
/// Built once via [`ModelInfo::new`] (or deserialized from a descriptor) and
/// read through accessors. The three strings are stored as given; emptiness
/// and format are the producer's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelInfo {
    mutant_type: MutantType,
    namespace_uri: String,
    root_type: String,
    root_name: String,
}

impl ModelInfo {
    /// Create metadata from its four parts, stored exactly as given.
    pub fn new(
        mutant_type: MutantType,
        namespace_uri: impl Into<String>,
        root_type: impl Into<String>,
        root_name: impl Into<String>,
    ) -> Self {
        Self {
            mutant_type,
            namespace_uri: namespace_uri.into(),
            root_type: root_type.into(),
            root_name: root_name.into(),
        }
    }

    /// Kind of model this metadata describes.
    pub fn mutant_type(&self) -> MutantType {
        self.mutant_type
    }

    /// Namespace/schema URI the model belongs to.
    pub fn namespace_uri(&self) -> &str {
        &self.namespace_uri
    }

    /// Name of the root type of the generated model.
    pub fn root_type(&self) -> &str {
        &self.root_type
    }

    /// Name of the root element of the generated model.
    pub fn root_name(&self) -> &str {
        &self.root_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_class_reads_back_unchanged() {
        let info = ModelInfo::new(
            MutantType::Class,
            "http://example.com/ns",
            "Invoice",
            "invoiceRoot",
        );

        assert_eq!(info.mutant_type(), MutantType::Class);
        assert_eq!(info.namespace_uri(), "http://example.com/ns");
        assert_eq!(info.root_type(), "Invoice");
        assert_eq!(info.root_name(), "invoiceRoot");
    }

    #[test]
    fn test_new_abstract_keeps_empty_strings() {
        let info = ModelInfo::new(MutantType::Abstract, "", "", "");

        assert_eq!(info.mutant_type(), MutantType::Abstract);
        assert_eq!(info.namespace_uri(), "");
        assert_eq!(info.root_type(), "");
        assert_eq!(info.root_name(), "");
    }

    #[test]
    fn test_new_uml_is_distinct_from_other_types() {
        let info = ModelInfo::new(
            MutantType::Uml,
            "urn:uml:model",
            "ClassDiagram",
            "diagramRoot",
        );

        assert_eq!(info.mutant_type(), MutantType::Uml);
        assert_ne!(info.mutant_type(), MutantType::Class);
        assert_ne!(info.mutant_type(), MutantType::Abstract);
        assert_eq!(info.namespace_uri(), "urn:uml:model");
        assert_eq!(info.root_type(), "ClassDiagram");
        assert_eq!(info.root_name(), "diagramRoot");
    }

    #[test]
    fn test_no_whitespace_normalization() {
        let info = ModelInfo::new(MutantType::Class, "  urn:x ", "\tRoot", "root\n");

        assert_eq!(info.namespace_uri(), "  urn:x ");
        assert_eq!(info.root_type(), "\tRoot");
        assert_eq!(info.root_name(), "root\n");
    }

    #[test]
    fn test_identical_inputs_are_equal() {
        let a = ModelInfo::new(MutantType::Class, "urn:a", "A", "a");
        let b = ModelInfo::new(MutantType::Class, String::from("urn:a"), "A", "a");
        assert_eq!(a, b);

        let c = ModelInfo::new(MutantType::Abstract, "urn:a", "A", "a");
        assert_ne!(a, c);
    }

    #[test]
    fn test_shared_across_threads() {
        let info = std::sync::Arc::new(ModelInfo::new(MutantType::Uml, "urn:u", "U", "u"));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let info = info.clone();
                std::thread::spawn(move || info.root_type().to_string())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "U");
        }
    }

    #[test]
    fn test_serialization_field_names() {
        let info = ModelInfo::new(
            MutantType::Class,
            "http://example.com/ns",
            "Invoice",
            "invoiceRoot",
        );
        let value = serde_json::to_value(&info).unwrap();

        assert_eq!(
            value,
            json!({
                "mutant_type": "CLASS",
                "namespace_uri": "http://example.com/ns",
                "root_type": "Invoice",
                "root_name": "invoiceRoot"
            })
        );
    }

    #[test]
    fn test_deserialize_requires_all_fields() {
        let missing = json!({
            "mutant_type": "UML",
            "namespace_uri": "urn:uml:model",
            "root_type": "ClassDiagram"
        });
        assert!(serde_json::from_value::<ModelInfo>(missing).is_err());

        let unknown_type = json!({
            "mutant_type": "INTERFACE",
            "namespace_uri": "",
            "root_type": "",
            "root_name": ""
        });
        assert!(serde_json::from_value::<ModelInfo>(unknown_type).is_err());
    }
}
