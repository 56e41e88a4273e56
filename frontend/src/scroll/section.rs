use std::fmt;
use std::rc::Rc;

/// Key of a page section. Doubles as the DOM `id` of the rendered region.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SectionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for SectionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Vertical placement of a region in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub top: f64,
    pub height: f64,
}

impl Extent {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open: the bottom edge belongs to the next section.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Something on the page whose position can be measured on demand.
///
/// Returns `None` while the region is not mounted.
pub trait SectionRegion {
    fn extent(&self) -> Option<Extent>;
}

#[derive(Clone)]
pub struct Section {
    id: SectionId,
    label: Option<&'static str>,
    region: Rc<dyn SectionRegion>,
}

impl Section {
    pub fn new(id: impl Into<SectionId>, region: impl SectionRegion + 'static) -> Self {
        Self {
            id: id.into(),
            label: None,
            region: Rc::new(region),
        }
    }

    /// Gives the section a button in the navigation bar.
    pub fn with_label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn id(&self) -> &SectionId {
        &self.id
    }

    pub fn label(&self) -> Option<&'static str> {
        self.label
    }

    pub fn extent(&self) -> Option<Extent> {
        self.region.extent()
    }
}

impl fmt::Debug for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Section")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("extent", &self.extent())
            .finish()
    }
}

/// One button in the navigation bar.
#[derive(Clone, Debug, PartialEq)]
pub struct NavEntry {
    pub id: SectionId,
    pub label: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::testing::FakeRegion;

    #[test]
    fn extent_is_half_open() {
        let extent = Extent::new(100.0, 50.0);
        assert!(!extent.contains(99.9));
        assert!(extent.contains(100.0));
        assert!(extent.contains(149.9));
        assert!(!extent.contains(150.0));
    }

    #[test]
    fn zero_height_extent_contains_nothing() {
        assert!(!Extent::new(10.0, 0.0).contains(10.0));
    }

    #[test]
    fn section_measures_through_its_region() {
        let region = FakeRegion::unmounted();
        let section = Section::new("section1", region.clone());
        assert_eq!(section.extent(), None);

        region.mount(0.0, 800.0);
        assert_eq!(section.extent(), Some(Extent::new(0.0, 800.0)));
    }

    #[test]
    fn section_id_compares_with_str() {
        let id = SectionId::from("section2");
        assert_eq!(id, "section2");
        assert_eq!(id.to_string(), "section2");
        assert_ne!(id, "section3");
    }
}
