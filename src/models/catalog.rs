use std::collections::HashSet;

/// Ordered, de-duplicated list of selectable book titles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookTitleCatalog {
    titles: Vec<String>,
    known: HashSet<String>,
}

impl BookTitleCatalog {
    /// Builds the catalog from the server's titles
    ///
    /// Priority titles the server also offers come first, in the given order.
    /// The rest follow in server order. Each title appears once.
    pub fn build(server_titles: Vec<String>, priority: &[String]) -> Self {
        let offered: HashSet<&str> = server_titles.iter().map(String::as_str).collect();

        let mut catalog = Self::default();
        for title in priority {
            if offered.contains(title.as_str()) {
                catalog.push(title.clone());
            }
        }
        for title in server_titles {
            catalog.push(title);
        }

        catalog
    }

    fn push(&mut self, title: String) {
        if self.known.insert(title.clone()) {
            self.titles.push(title);
        }
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn contains(&self, title: &str) -> bool {
        self.known.contains(title)
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}
