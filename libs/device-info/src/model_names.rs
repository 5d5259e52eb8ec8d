//! Canonical device names.
//!
//! Hardware reports terse product codes (`RM-821_eu_euro1_342`, `PM23300`).
//! This table maps them to the names people know the devices by.

/// Result of resolving a reported `(manufacturer, model)` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalPhoneName {
    pub reported_manufacturer: String,
    pub reported_model: String,
    pub canonical_manufacturer: String,
    pub canonical_model: String,
    pub comments: Option<String>,
    pub is_resolved: bool,
}

impl CanonicalPhoneName {
    /// Manufacturer and model joined by a space.
    #[must_use]
    pub fn full_canonical_name(&self) -> String {
        match (
            self.canonical_manufacturer.is_empty(),
            self.canonical_model.is_empty(),
        ) {
            (true, _) => self.canonical_model.clone(),
            (false, true) => self.canonical_manufacturer.clone(),
            (false, false) => format!("{} {}", self.canonical_manufacturer, self.canonical_model),
        }
    }
}

/// `(product code, canonical model, comment)`
type ModelRow = (&'static str, &'static str, Option<&'static str>);

struct Vendor {
    /// Reported manufacturer, compared case-insensitively.
    reported: &'static str,
    canonical: &'static str,
    /// Product codes carry a `_variant` suffix that must be dropped.
    strip_variant: bool,
    models: &'static [ModelRow],
}

const NOKIA_MODELS: &[ModelRow] = &[
    ("RM-803", "Lumia 510", None),
    ("RM-846", "Lumia 620", None),
    ("RM-914", "Lumia 520", None),
    ("RM-915", "Lumia 520", Some("LTA")),
    ("RM-917", "Lumia 521", Some("T-Mobile")),
    ("RM-974", "Lumia 635", None),
    ("RM-975", "Lumia 635", None),
    ("RM-978", "Lumia 635", None),
    ("RM-885", "Lumia 720", None),
    ("RM-887", "Lumia 720", Some("China")),
    ("RM-878", "Lumia 810", Some("T-Mobile")),
    ("RM-824", "Lumia 820", None),
    ("RM-825", "Lumia 820", None),
    ("RM-826", "Lumia 820", None),
    ("RM-983", "Lumia 830", None),
    ("RM-984", "Lumia 830", None),
    ("RM-985", "Lumia 830", None),
    ("RM-820", "Lumia 920", None),
    ("RM-821", "Lumia 920", None),
    ("RM-822", "Lumia 920", None),
    ("RM-892", "Lumia 925", None),
    ("RM-893", "Lumia 925", None),
    ("RM-910", "Lumia 925", None),
    ("RM-860", "Lumia 928", Some("Verizon")),
    ("RM-927", "Lumia Icon", Some("Verizon")),
    ("RM-1045", "Lumia 930", None),
    ("RM-875", "Lumia 1020", None),
    ("RM-876", "Lumia 1020", None),
    ("RM-877", "Lumia 1020", None),
    ("RM-994", "Lumia 1320", None),
    ("RM-995", "Lumia 1320", None),
    ("RM-996", "Lumia 1320", None),
    ("RM-937", "Lumia 1520", None),
    ("RM-938", "Lumia 1520", Some("AT&T")),
    ("RM-939", "Lumia 1520", None),
    ("RM-940", "Lumia 1520", None),
];

const HTC_MODELS: &[ModelRow] = &[
    ("A620b", "Windows Phone 8S", None),
    ("A620d", "Windows Phone 8S", None),
    ("A620e", "Windows Phone 8S", None),
    ("C620b", "Windows Phone 8X", None),
    ("C620d", "Windows Phone 8X", None),
    ("C620e", "Windows Phone 8X", None),
    ("C625b", "Windows Phone 8X", None),
    ("PM23300", "Windows Phone 8X", Some("AT&T")),
    ("6990LVW", "One (M8) for Windows", Some("Verizon")),
];

const SAMSUNG_MODELS: &[ModelRow] = &[
    ("GT-I8750", "ATIV S", None),
    ("SGH-T899M", "ATIV S", Some("Canada")),
    ("SCH-I930", "ATIV Odyssey", Some("Verizon")),
    ("GT-I8350", "Omnia W", None),
    ("GT-S7530", "Omnia M", None),
    ("SGH-I937", "Focus S", Some("AT&T")),
    ("SGH-I677", "Focus Flash", Some("AT&T")),
];

const HUAWEI_MODELS: &[ModelRow] = &[
    ("W1-C00", "Ascend W1", None),
    ("W1-U00", "Ascend W1", None),
    ("W1-U34", "Ascend W1", None),
    ("W2-U00", "Ascend W2", None),
    ("W2-U051", "Ascend W2", None),
];

const VENDORS: &[Vendor] = &[
    Vendor {
        reported: "NOKIA",
        canonical: "Nokia",
        strip_variant: true,
        models: NOKIA_MODELS,
    },
    Vendor {
        reported: "HTC",
        canonical: "HTC",
        strip_variant: false,
        models: HTC_MODELS,
    },
    Vendor {
        reported: "SAMSUNG",
        canonical: "Samsung",
        strip_variant: false,
        models: SAMSUNG_MODELS,
    },
    Vendor {
        reported: "HUAWEI",
        canonical: "Huawei",
        strip_variant: false,
        models: HUAWEI_MODELS,
    },
];

/// Resolve a reported manufacturer and model code to its canonical name.
///
/// Unknown pairs resolve to themselves with `is_resolved == false`. A known
/// manufacturer keeps its canonical spelling even when the model is unknown.
#[must_use]
pub fn resolve(manufacturer: &str, model: &str) -> CanonicalPhoneName {
    let manufacturer = manufacturer.trim();
    let model = model.trim();

    let mut name = CanonicalPhoneName {
        reported_manufacturer: manufacturer.to_owned(),
        reported_model: model.to_owned(),
        canonical_manufacturer: manufacturer.to_owned(),
        canonical_model: model.to_owned(),
        comments: None,
        is_resolved: false,
    };

    let Some(vendor) = VENDORS
        .iter()
        .find(|v| v.reported.eq_ignore_ascii_case(manufacturer))
    else {
        return name;
    };
    vendor.canonical.clone_into(&mut name.canonical_manufacturer);

    let code = if vendor.strip_variant {
        model.split('_').next().unwrap_or(model)
    } else {
        model
    };

    if let Some((_, canonical, comment)) = vendor
        .models
        .iter()
        .find(|(c, _, _)| c.eq_ignore_ascii_case(code))
    {
        (*canonical).clone_into(&mut name.canonical_model);
        name.comments = comment.map(str::to_owned);
        name.is_resolved = true;
    }

    name
}
