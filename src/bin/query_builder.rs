use colored::Colorize;
use creational_patterns::builder::{build_and_render, Direction, HtmlTemplateBuilder, QueryBuilder};

// =============================================================================
// Query builder
// =============================================================================

fn users_query() -> creational_patterns::Result<String> {
    QueryBuilder::new("users")
        .select(["id", "name", "email"])
        .where_clause("age > 18")
        .where_clause("country = 'Cri'")
        .order_by("name", Direction::Asc)
        .limit(10)
        .execute()
}

// =============================================================================
// Template builder
// =============================================================================

fn print_template(title: &str, builder: &HtmlTemplateBuilder) {
    println!("{}", title.blue());
    match build_and_render(builder) {
        Ok(html) => println!("{html}\n"),
        Err(err) => eprintln!("{}", err.to_string().red()),
    }
}

fn main() {
    println!("{}", "Query:".red());
    match users_query() {
        Ok(query) => println!("{query}\n"),
        Err(err) => eprintln!("{}", err.to_string().red()),
    }

    let mut econsent = HtmlTemplateBuilder::new();
    econsent
        .header("<header>Welcome to the eConsent application</header>\n")
        .body("  <body>Body</body>\n")
        .footer("<footer>Footer</footer>");
    print_template("Template:", &econsent);

    let mut surveys = HtmlTemplateBuilder::new();
    surveys
        .header("<header>Welcome to the surveys application</header>\n")
        .footer("<footer>Footer</footer>");
    print_template("Template:", &surveys);
}
