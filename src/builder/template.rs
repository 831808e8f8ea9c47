use super::{Build, Render};
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlTemplate {
    pub header: Option<String>,
    pub body: Option<String>,
    pub footer: Option<String>,
}

impl HtmlTemplate {
    pub fn builder() -> HtmlTemplateBuilder {
        HtmlTemplateBuilder::new()
    }

    /// Header, body and footer concatenated; unset sections contribute nothing.
    pub fn print(&self) -> String {
        [&self.header, &self.body, &self.footer]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect()
    }
}

impl Render for HtmlTemplate {
    fn render(&self) -> String {
        self.print()
    }
}

#[derive(Debug, Clone, Default)]
pub struct HtmlTemplateBuilder {
    template: HtmlTemplate,
}

impl HtmlTemplateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&mut self, header: impl Into<String>) -> &mut Self {
        self.template.header = Some(header.into());
        self
    }

    pub fn body(&mut self, body: impl Into<String>) -> &mut Self {
        self.template.body = Some(body.into());
        self
    }

    pub fn footer(&mut self, footer: impl Into<String>) -> &mut Self {
        self.template.footer = Some(footer.into());
        self
    }
}

impl Build for HtmlTemplateBuilder {
    type Output = HtmlTemplate;

    fn build(&self) -> Result<HtmlTemplate> {
        Ok(self.template.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_template() {
        let template = HtmlTemplate::builder()
            .header("<header>Welcome to the eConsent application</header>\n")
            .body("  <body>Body</body>\n")
            .footer("<footer>Footer</footer>")
            .build()
            .unwrap();

        assert_eq!(
            template.print(),
            "<header>Welcome to the eConsent application</header>\n  <body>Body</body>\n<footer>Footer</footer>"
        );
    }

    #[test]
    fn test_missing_body_is_empty() {
        let template = HtmlTemplateBuilder::new()
            .footer("<footer>Footer</footer>")
            .header("<header>Surveys</header>\n")
            .build()
            .unwrap();

        assert_eq!(template.print(), "<header>Surveys</header>\n<footer>Footer</footer>");
        assert!(template.body.is_none());
    }

    #[test]
    fn test_empty_template_prints_nothing() {
        let template = HtmlTemplateBuilder::new().build().unwrap();
        assert_eq!(template.render(), "");
    }

    #[test]
    fn test_previous_build_is_not_mutated() {
        let mut builder = HtmlTemplateBuilder::new();
        builder.header("a");
        let first = builder.build().unwrap();
        builder.header("b").body("c");

        assert_eq!(first.print(), "a");
        assert_eq!(builder.build().unwrap().print(), "bc");
    }
}
