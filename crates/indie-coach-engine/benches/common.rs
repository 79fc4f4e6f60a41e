// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_response(sections: usize) -> String {
    let base = "## 💡 Understanding Royalties\n\n**Key Takeaway:** Royalties come from *two* copyrights: the `master` and the composition.\n\n> [!ACTION] Register with a PRO this week.\n\n| Stream | Who pays |\n|---|---|\n| Mechanical | MLC |\n| Performance | PRO |\n\n1. Split sheet\n2. 📝 Register\n3. Collect\n\n";
    base.repeat(sections)
}

#[allow(dead_code)]
pub fn generate_widget_response(widgets: usize) -> String {
    let mut content = String::new();
    for i in 0..widgets {
        content.push_str(&format!("### Budget {i}\n\n"));
        content.push_str(r#"[BUDGET_TABLE]{"headers":["Item","Low","High","Estimate"],"rows":[{"item":"Mixing","low":100,"high":500,"estimate":250},{"item":"Mastering","low":50,"high":200,"estimate":100}]}[/BUDGET_TABLE]"#);
        content.push_str("\n\n");
        content.push_str(r#"[TICKET_ESTIMATOR]{"defaults":{"ticketPrice":20,"venueCapacity":200,"sellThroughRate":75,"merchSpendPerGuest":10,"venueFeePercent":15,"venueCostFixed":500,"marketingCost":200,"crewCost":300}}[/TICKET_ESTIMATOR]"#);
        content.push_str("\n\n");
    }
    content
}
