use crate::templates::app_layout;
use maud::{html, Markup};

/// A node on the flow canvas.
pub struct FlowNode {
    pub id: &'static str,
    pub label: &'static str,
    pub x: u32,
    pub y: u32,
}

/// Every new flow starts with a single entry node.
pub const INITIAL_NODES: &[FlowNode] = &[FlowNode {
    id: "1",
    label: "Start",
    x: 250,
    y: 25,
}];

pub fn flow_builder_page() -> Markup {
    app_layout(
        "Flow Builder",
        html! {
            nav class="site-header" {
                h1 { "Flow Builder" }
                div {
                    a href="/dashboard" { "Back to dashboard" }
                    " "
                    // Flows are not persisted yet.
                    button type="button" class="btn" disabled { "Save Flow" }
                }
            }
            div class="flow-canvas" {
                @for node in INITIAL_NODES {
                    div
                        class="flow-node"
                        data-node-id=(node.id)
                        style=(format!("left: {}px; top: {}px;", node.x, node.y))
                    {
                        (node.label)
                    }
                }
            }
        },
    )
}
