//! WASM bindings for the circle-layout-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.

use wasm_bindgen::prelude::*;

use crate::geometry::Circle;
use crate::layout::{calculate_default_radius, layout_tree, pack, LayoutConfig, NodeMetrics};
use crate::output::{ErrorInfo, LayoutOutput, NodeOutput, PackOutput};
use crate::tree::{build_tree, NodeInput};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

/// Native builds have no browser console.
#[cfg(not(target_arch = "wasm32"))]
pub fn console_error(s: &str) {
    eprintln!("{}", s);
}

const SERIALIZE_FAILED: &str = "{\"error\": {\"message\": \"Serialization error\"}}";

/// Pack a JSON array of circles (`[{"r": 3}, ...]`) and return
/// `{"circles": [...], "enclosing": {...}}`.
#[wasm_bindgen]
pub fn pack_circles(input: &str, padding: f64) -> String {
    let output = match run_pack(input, padding) {
        Ok(output) => output,
        Err(e) => {
            console_error(&format!("Error packing circles: {}", e.message));
            PackOutput {
                circles: vec![],
                enclosing: None,
                error: Some(e),
            }
        }
    };
    serde_json::to_string(&output).unwrap_or_else(|_| SERIALIZE_FAILED.to_string())
}

/// Default radius for a node with the given label width and number of
/// children.
#[wasm_bindgen]
pub fn default_radius(label_width: f64, child_count: u32) -> f64 {
    calculate_default_radius(&NodeMetrics {
        label_width,
        child_count: child_count as usize,
    })
}

/// Lay out a nested node description
/// (`{"id", "label_width", "folded"?, "children"?}`) and return every visible
/// node's circle in pre-order.
#[wasm_bindgen]
pub fn layout_hierarchy(input: &str, padding: f64) -> String {
    let output = match run_layout(input, padding) {
        Ok(output) => output,
        Err(e) => {
            console_error(&format!("Error laying out hierarchy: {}", e.message));
            LayoutOutput {
                nodes: vec![],
                error: Some(e),
            }
        }
    };
    serde_json::to_string(&output).unwrap_or_else(|_| SERIALIZE_FAILED.to_string())
}

fn check_padding(padding: f64) -> Result<(), ErrorInfo> {
    if padding.is_finite() && padding >= 0.0 {
        Ok(())
    } else {
        Err(ErrorInfo::message(format!(
            "Padding must be a non-negative number, got {}",
            padding
        )))
    }
}

fn run_pack(input: &str, padding: f64) -> Result<PackOutput, ErrorInfo> {
    check_padding(padding)?;
    let mut circles: Vec<Circle> = serde_json::from_str(input)?;
    if circles.is_empty() {
        return Err(ErrorInfo::message("Nothing to pack"));
    }
    if let Some((i, c)) = circles
        .iter()
        .enumerate()
        .find(|(_, c)| !c.r.is_finite() || c.r < 0.0)
    {
        return Err(ErrorInfo::message(format!(
            "Circle {} has invalid radius {}",
            i, c.r
        )));
    }

    let enclosing = pack(&mut circles, padding);
    Ok(PackOutput {
        circles,
        enclosing: Some(enclosing),
        error: None,
    })
}

fn run_layout(input: &str, padding: f64) -> Result<LayoutOutput, ErrorInfo> {
    check_padding(padding)?;
    let root: NodeInput = serde_json::from_str(input)?;
    let tree = build_tree(&root)?;

    let cfg = LayoutConfig {
        padding,
        ..LayoutConfig::default()
    };
    let layout = layout_tree(&tree, &cfg);

    let nodes = tree
        .pre_order()
        .into_iter()
        .filter_map(|nid| {
            let node = tree.node(nid);
            let world = layout.world.get(&nid)?;
            let local = layout.local.get(&nid)?;
            Some(NodeOutput {
                id: node.id.clone(),
                parent: node.parent.map(|p| tree.node(p).id.clone()),
                x: world.x,
                y: world.y,
                r: world.r,
                local_x: local.x,
                local_y: local.y,
                folded: node.folded,
            })
        })
        .collect();

    Ok(LayoutOutput { nodes, error: None })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_pack_circles_json() {
        let out = pack_circles(r#"[{"r": 3}, {"r": 4}]"#, 10.0);
        let v: Value = serde_json::from_str(&out).unwrap();

        let a = &v["circles"][0];
        let b = &v["circles"][1];
        let dx = b["x"].as_f64().unwrap() - a["x"].as_f64().unwrap();
        let dy = b["y"].as_f64().unwrap() - a["y"].as_f64().unwrap();
        assert_eq!(dx.hypot(dy), 27.0);
        assert_eq!(v["enclosing"]["r"], json!(27.0));
        assert!(v.get("error").is_none());
    }

    #[test]
    fn test_default_radius_export() {
        assert_eq!(default_radius(15.0, 0), 12.5);
        assert_eq!(default_radius(15.0, 1), 40.0);
        assert_eq!(default_radius(72.0, 3), 41.0);
    }

    #[test]
    fn test_layout_hierarchy_json() {
        let input = json!({
            "id": "root",
            "label_width": 10.0,
            "children": [
                { "id": "x", "label_width": 10.0 },
                { "id": "y", "label_width": 10.0, "folded": true, "children": [
                    { "id": "y.z", "label_width": 10.0 }
                ]}
            ]
        });
        let out = layout_hierarchy(&input.to_string(), 1.0);
        let v: Value = serde_json::from_str(&out).unwrap();

        let ids: Vec<&str> = v["nodes"]
            .as_array()
            .unwrap()
            .iter()
            .map(|n| n["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["root", "x", "y"]);
        assert_eq!(v["nodes"][0]["parent"], Value::Null);
        assert_eq!(v["nodes"][1]["parent"], json!("root"));
        assert_eq!(v["nodes"][2]["r"], json!(40.0));
        assert_eq!(v["nodes"][2]["folded"], json!(true));
    }

    #[test]
    fn test_pack_circles_reports_empty_input_as_error() {
        let out = pack_circles("[]", 1.0);
        let v: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(v["error"]["message"], json!("Nothing to pack"));
        assert!(v.get("circles").is_none());
    }

    #[test]
    fn test_layout_hierarchy_reports_bad_json_as_error() {
        let out = layout_hierarchy("{\"id\": \"a\",", 1.0);
        let v: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(v["error"]["line"], json!(1));
        assert!(v.get("nodes").is_none());
    }

    #[test]
    fn test_run_pack_rejects_bad_json() {
        let err = run_pack("[{\"r\": 3}", 0.0).unwrap_err();
        assert_eq!(err.line, Some(1));
    }

    #[test]
    fn test_run_pack_rejects_negative_radius() {
        let err = run_pack(r#"[{"r": 3}, {"r": -1}]"#, 0.0).unwrap_err();
        assert_eq!(err.message, "Circle 1 has invalid radius -1");
    }

    #[test]
    fn test_run_pack_rejects_empty_input() {
        assert!(run_pack("[]", 1.0).is_err());
    }

    #[test]
    fn test_run_layout_rejects_negative_padding() {
        let err = run_layout(r#"{"id": "a", "label_width": 1}"#, -1.0).unwrap_err();
        assert!(err.message.contains("Padding"));
    }

    #[test]
    fn test_run_layout_reports_duplicate_node() {
        let input = r#"{"id": "a", "label_width": 1, "children": [{"id": "a", "label_width": 1}]}"#;
        let err = run_layout(input, 1.0).unwrap_err();

        assert_eq!(err.node.as_deref(), Some("a"));
    }
}
