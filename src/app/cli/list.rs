//! List command implementation.

pub fn run_list() {
    println!("Available routes:");
    for route in crate::app::api::list_routes() {
        println!("  {} - {}", route.name, route.templates.join(", "));
    }
    println!("  all - every route above");
}
