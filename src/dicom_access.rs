use dicom::core::Tag;
use dicom::object::mem::InMemElement;
use dicom::object::InMemDicomObject;

/// Small helper trait to pull typed values out of a dataset by tag.
pub trait ElementAccess {
    fn element_str(&self, tag: Tag) -> Option<String>;
    fn element_int(&self, tag: Tag) -> Option<i32>;
}

impl ElementAccess for InMemDicomObject {
    fn element_str(&self, tag: Tag) -> Option<String> {
        self.element(tag).ok().and_then(element_text)
    }

    fn element_int(&self, tag: Tag) -> Option<i32> {
        self.element(tag).ok().and_then(element_int)
    }
}

/// Text of an element with padding removed; `None` for empty or non-textual values.
pub fn element_text(element: &InMemElement) -> Option<String> {
    element
        .to_str()
        .ok()
        .map(|s| s.trim_matches(|c: char| c.is_whitespace() || c == '\0').to_string())
        .filter(|s| !s.is_empty())
}

pub fn element_int(element: &InMemElement) -> Option<i32> {
    element.to_int::<i32>().ok()
}

pub fn element_floats(element: &InMemElement) -> Option<Vec<f64>> {
    element
        .to_multi_float64()
        .ok()
        .filter(|values| !values.is_empty())
}

pub fn element_float(element: &InMemElement) -> Option<f64> {
    element_floats(element).and_then(|values| values.first().copied())
}

/// Items of a sequence element, `None` for primitive values.
pub fn sequence_items(element: &InMemElement) -> Option<&[InMemDicomObject]> {
    element.value().items()
}
