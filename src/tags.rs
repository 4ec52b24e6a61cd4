//
// tags.rs
// Dicom-Catalog-rs
//
// Static catalog of known attributes, their functional group macro nesting and the modality subsets.
//
// Thales Matheus Mendonça Santos - November 2025

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use dicom::core::{Tag, VR};
use once_cell::sync::Lazy;

use crate::tag_table::ENTRIES;

/// Shared Functional Groups Sequence (5200,9229).
pub const SHARED_FUNCTIONAL_GROUPS: Tag = Tag(0x5200, 0x9229);
/// Per-Frame Functional Groups Sequence (5200,9230).
pub const PER_FRAME_FUNCTIONAL_GROUPS: Tag = Tag(0x5200, 0x9230);

/// Where a functional group macro is normally placed in an enhanced file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    PerFrame,
    Shared,
}

/// One enclosing functional group macro, identified by its sequence tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacroLink {
    pub sequence: Tag,
    pub placement: Placement,
}

impl MacroLink {
    pub const fn per_frame(group: u16, element: u16) -> Self {
        MacroLink {
            sequence: Tag(group, element),
            placement: Placement::PerFrame,
        }
    }

    pub const fn shared(group: u16, element: u16) -> Self {
        MacroLink {
            sequence: Tag(group, element),
            placement: Placement::Shared,
        }
    }
}

/// Modality families with their own tag subsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modality {
    XRay,
    CT,
    NuclearMedicine,
    Ultrasound,
    MR,
}

impl Modality {
    pub const ALL: [Modality; 5] = [
        Modality::XRay,
        Modality::CT,
        Modality::NuclearMedicine,
        Modality::Ultrasound,
        Modality::MR,
    ];

    const fn bit(self) -> u8 {
        match self {
            Modality::XRay => 1,
            Modality::CT => 1 << 1,
            Modality::NuclearMedicine => 1 << 2,
            Modality::Ultrasound => 1 << 3,
            Modality::MR => 1 << 4,
        }
    }

    /// Accepts family names as well as the Modality (0008,0060) codes belonging to each family.
    pub fn from_name(name: &str) -> Option<Self> {
        let upper = name.trim().to_ascii_uppercase();
        let modality = match upper.as_str() {
            "XRAY" | "X-RAY" | "CR" | "DX" | "MG" | "XA" | "RF" | "IO" | "PX" => Modality::XRay,
            "CT" => Modality::CT,
            "NUCLEAR MEDICINE" | "NUCLEARMEDICINE" | "NM" | "PT" => Modality::NuclearMedicine,
            "ULTRASOUND" | "US" | "IVUS" => Modality::Ultrasound,
            "MR" | "MRI" => Modality::MR,
            _ => return None,
        };
        Some(modality)
    }

    pub fn name(self) -> &'static str {
        match self {
            Modality::XRay => "XRAY",
            Modality::CT => "CT",
            Modality::NuclearMedicine => "Nuclear Medicine",
            Modality::Ultrasound => "Ultrasound",
            Modality::MR => "MRI",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bit set of modality families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modalities(u8);

impl Modalities {
    pub const NONE: Modalities = Modalities(0);
    pub const XR: Modalities = Modalities(Modality::XRay.bit());
    pub const CT: Modalities = Modalities(Modality::CT.bit());
    pub const NM: Modalities = Modalities(Modality::NuclearMedicine.bit());
    pub const US: Modalities = Modalities(Modality::Ultrasound.bit());
    pub const MR: Modalities = Modalities(Modality::MR.bit());
    pub const ALL: Modalities = Modalities(0b1_1111);

    pub const fn with(self, other: Modalities) -> Modalities {
        Modalities(self.0 | other.0)
    }

    pub const fn contains(self, modality: Modality) -> bool {
        self.0 & modality.bit() != 0
    }

    pub fn iter(self) -> impl Iterator<Item = Modality> {
        Modality::ALL.into_iter().filter(move |m| self.contains(*m))
    }
}

/// A known attribute. Equality and hashing only consider the (group, element) code.
#[derive(Debug, Clone, Copy)]
pub struct TagDef {
    tag: Tag,
    keyword: &'static str,
    name: &'static str,
    vr: VR,
    macros: &'static [MacroLink],
    modalities: Modalities,
}

impl TagDef {
    pub const fn new(
        group: u16,
        element: u16,
        keyword: &'static str,
        name: &'static str,
        vr: VR,
        macros: &'static [MacroLink],
        modalities: Modalities,
    ) -> Self {
        TagDef {
            tag: Tag(group, element),
            keyword,
            name,
            vr,
            macros,
            modalities,
        }
    }

    /// Describes an attribute outside the registry. It has no macros, so it resolves as top-level.
    pub const fn unregistered(tag: Tag) -> Self {
        TagDef {
            tag,
            keyword: "",
            name: "Unknown",
            vr: VR::UN,
            macros: &[],
            modalities: Modalities::NONE,
        }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn group(&self) -> u16 {
        self.tag.group()
    }

    pub fn element(&self) -> u16 {
        self.tag.element()
    }

    pub fn keyword(&self) -> &'static str {
        self.keyword
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn vr(&self) -> VR {
        self.vr
    }

    /// Enclosing functional group macros, in declaration order.
    pub fn macros(&self) -> &'static [MacroLink] {
        self.macros
    }

    pub fn modalities(&self) -> Modalities {
        self.modalities
    }

    pub fn is_top_level(&self) -> bool {
        self.macros.is_empty()
    }

    /// True when at least one enclosing macro is normally placed per frame.
    pub fn is_per_frame(&self) -> bool {
        self.macros
            .iter()
            .any(|link| link.placement == Placement::PerFrame)
    }
}

impl PartialEq for TagDef {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
    }
}

impl Eq for TagDef {}

impl Hash for TagDef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tag.hash(state);
    }
}

impl fmt::Display for TagDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:04X},{:04X}) {}",
            self.tag.group(),
            self.tag.element(),
            self.name
        )
    }
}

struct Registry {
    by_tag: HashMap<Tag, &'static TagDef>,
    by_keyword: HashMap<&'static str, &'static TagDef>,
}

static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let mut by_tag = HashMap::with_capacity(ENTRIES.len());
    let mut by_keyword = HashMap::with_capacity(ENTRIES.len());
    for entry in ENTRIES {
        by_tag.insert(entry.tag, entry);
        by_keyword.insert(entry.keyword, entry);
    }
    Registry { by_tag, by_keyword }
});

/// Every registered attribute, in table order.
pub fn all() -> &'static [TagDef] {
    ENTRIES
}

pub fn lookup(tag: Tag) -> Option<&'static TagDef> {
    REGISTRY.by_tag.get(&tag).copied()
}

pub fn lookup_by_code(group: u16, element: u16) -> Option<&'static TagDef> {
    lookup(Tag(group, element))
}

pub fn lookup_by_keyword(keyword: &str) -> Option<&'static TagDef> {
    REGISTRY.by_keyword.get(keyword).copied()
}

/// Registry entry for `tag`, or an unregistered top-level description of it.
pub fn describe(tag: Tag) -> TagDef {
    lookup(tag)
        .copied()
        .unwrap_or_else(|| TagDef::unregistered(tag))
}

/// The tags belonging to one modality family, in table order.
pub fn modality_tags(modality: Modality) -> Vec<&'static TagDef> {
    ENTRIES
        .iter()
        .filter(|entry| entry.modalities.contains(modality))
        .collect()
}

/// Modality subset by family name or modality code; `None` for unknown names.
pub fn modality_set(name: &str) -> Option<Vec<&'static TagDef>> {
    Modality::from_name(name).map(modality_tags)
}

/// Parses `(gggg,eeee)`, `gggg,eeee`, `ggggeeee` or a registry keyword.
pub fn parse_tag(text: &str) -> Option<TagDef> {
    let trimmed = text.trim();
    if let Some(entry) = lookup_by_keyword(trimmed) {
        return Some(*entry);
    }

    let hex: String = trimmed
        .chars()
        .filter(|c| !matches!(c, '(' | ')' | ',' | ' '))
        .collect();
    if hex.len() != 8 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let group = u16::from_str_radix(&hex[..4], 16).ok()?;
    let element = u16::from_str_radix(&hex[4..], 16).ok()?;
    Some(describe(Tag(group, element)))
}
