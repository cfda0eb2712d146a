//! Rendering of exported import blocks for the terminal.

use tabled::{Table, Tabled};
use termtree::Tree;

use crate::connectors::{CONNECTORS, ConnectorError, ConnectorSettings, get_connector};
use crate::import_block::ImportBlock;

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Resource Type")]
    resource_type: String,
    #[tabled(rename = "Count")]
    count: usize,
}

/// Import blocks separated by blank lines, each ending in a newline.
pub fn render_hcl(blocks: &[ImportBlock]) -> String {
    blocks
        .iter()
        .map(|block| format!("{}\n", block))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_json(blocks: &[ImportBlock]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(blocks)
}

/// Per-type counts, in order of first appearance.
pub fn summary_table(blocks: &[ImportBlock]) -> String {
    let mut rows: Vec<SummaryRow> = Vec::new();

    for block in blocks {
        match rows
            .iter_mut()
            .find(|row| row.resource_type == block.resource_type())
        {
            Some(row) => row.count += 1,
            None => rows.push(SummaryRow {
                resource_type: block.resource_type().to_string(),
                count: 1,
            }),
        }
    }

    Table::new(rows).to_string()
}

/// Tree of every connector and the resource types it exports.
pub fn connector_tree() -> Result<Tree<String>, ConnectorError> {
    let mut root = Tree::new("pingcli".to_string());

    for name in CONNECTORS {
        let connector = get_connector(name, ConnectorSettings::default())?;
        let leaves = connector
            .resource_types()
            .into_iter()
            .map(|t| Tree::new(t.to_string()));
        root.push(Tree::new(name.to_string()).with_leaves(leaves));
    }

    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ImportBlock> {
        vec![
            ImportBlock::new("pingone_group", "Admins", "env/g1"),
            ImportBlock::new("pingone_population", "Default", "env/p1"),
            ImportBlock::new("pingone_group", "Users", "env/g2"),
        ]
    }

    #[test]
    fn test_render_hcl_separates_blocks() {
        let hcl = render_hcl(&sample()[..2]);
        assert_eq!(
            hcl,
            "import {\n  to = pingone_group.pingcli__Admins\n  id = \"env/g1\"\n}\n\
             \n\
             import {\n  to = pingone_population.pingcli__Default\n  id = \"env/p1\"\n}\n"
        );
    }

    #[test]
    fn test_render_hcl_empty() {
        assert_eq!(render_hcl(&[]), "");
    }

    #[test]
    fn test_render_json_array() {
        let json = render_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 3);
        assert_eq!(value[2]["resource_name"], "pingcli__Users");
    }

    #[test]
    fn test_summary_table_counts_by_type() {
        let table = summary_table(&sample());
        assert!(table.contains("Resource Type"));
        assert!(table.contains("pingone_group"));
        assert!(table.contains("pingone_population"));
        assert!(table.contains('2'));

        let group_pos = table.find("pingone_group").unwrap();
        let population_pos = table.find("pingone_population").unwrap();
        assert!(group_pos < population_pos);
    }

    #[test]
    fn test_connector_tree_lists_resource_types() {
        let tree = connector_tree().unwrap().to_string();
        assert!(tree.starts_with("pingcli"));
        assert!(tree.contains("pingfederate"));
        assert!(tree.contains("pingfederate_oauth_client"));
        assert!(tree.contains("pingone"));
        assert!(tree.contains("pingone_branding_settings"));
    }
}
