// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (inspecting a corpus or listing its labels).
//
// Rules for this layer:
//   - No tensor math here
//   - No UI or printing here (that's Layer 1)
//   - No direct file parsing (that's Layer 4 and 5)
//   - Only workflow coordination
//
// Think of this layer as the "director" — it tells other
// layers what to do but doesn't do the work itself.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The corpus-inspection workflow
pub mod inspect_use_case;

// The label-vocabulary listing workflow
pub mod labels_use_case;
