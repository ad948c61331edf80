// Every dependency is reached through the library crate.
#![allow(unused_crate_dependencies)]

use review_graph_dashboard::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
