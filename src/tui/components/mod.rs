// Components module - UI building blocks
//
// Shell components are rendered on every frame:
// - Title bar: App name, catalog URL, busy spinner
// - Status bar: Product count, form mode, key hints
// - Logs panel: Recent activity
//
// The form and product list panels hold the interactive state.

pub mod form_panel;
pub mod logs_panel;
pub mod product_list;
pub mod status_bar;
pub mod title_bar;

