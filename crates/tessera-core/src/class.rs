/// Builds a `class` attribute in a fixed order: base class, conditional
/// modifiers, the author's `styleClass`, then responsive classes.
///
/// Empty entries are dropped and entries are joined by a single space, so
/// the result never has leading or trailing whitespace.
///
/// ```
/// use tessera_core::ClassList;
///
/// let class = ClassList::new("carousel")
///     .modifier(true, "slide")
///     .style_class(Some("custom"))
///     .responsive(["col-md-6".to_string()])
///     .build();
/// assert_eq!(class, "carousel slide custom col-md-6");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    pub fn new(base: &str) -> Self {
        let mut list = Self::default();
        list.push(base);
        list
    }

    /// Add `class` only when `enabled` holds.
    pub fn modifier(mut self, enabled: bool, class: &str) -> Self {
        if enabled {
            self.push(class);
        }
        self
    }

    /// Append the author-supplied `styleClass`, if any.
    pub fn style_class(mut self, style_class: Option<&str>) -> Self {
        if let Some(s) = style_class {
            self.push(s);
        }
        self
    }

    /// Append resolved responsive classes.
    pub fn responsive(mut self, classes: impl IntoIterator<Item = String>) -> Self {
        for class in classes {
            self.push(&class);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn build(self) -> String {
        self.classes.join(" ")
    }

    fn push(&mut self, class: &str) {
        let class = class.trim();
        if !class.is_empty() {
            self.classes.push(class.to_string());
        }
    }
}
