use leptos::prelude::*;
use recruitment_pipeline::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App);
}
