//! Brand-lookup heuristic mapping a free-text title to a bike category.

/// Sentinel category: marks a row as still eligible for re-classification.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Known brand and model substrings with the category they imply. Keys are
/// lowercase and matched as substrings of the lowercased title. The table
/// is static and never mutated.
const BRAND_CATEGORIES: &[(&str, &str)] = &[
    ("trek", "Road Bike"),
    ("schwinn", "Cruiser Bike"),
    ("wheel speed", "Electric Bike"),
    ("rad power", "Electric Bike"),
    ("igo", "Electric Bike"),
    ("emmo", "Electric Bike"),
    ("decathlon", "Hybrid Bike"),
    ("norco", "Mountain Bike"),
    ("raleigh", "Hybrid Bike"),
    ("brodie", "Hybrid Bike"),
    ("supercycle", "Mountain Bike"),
    ("gt bicycles", "Mountain Bike"),
    ("aostirmotor", "Electric Bike"),
    ("rocky mountain", "Mountain Bike"),
    ("specialized", "Hybrid Bike"),
    ("kona", "Hybrid Bike"),
    ("giant", "Road Bike"),
    ("devinci", "Mountain Bike"),
    ("ccm", "Hybrid Bike"),
    ("northrock", "Mountain Bike"),
    ("diamondback", "Mountain Bike"),
    ("opus", "Hybrid Bike"),
    ("fx", "Road Bike"),
    ("storm", "Mountain Bike"),
    ("dew", "Hybrid Bike"),
    ("hardrock", "Mountain Bike"),
    ("aggressor", "Mountain Bike"),
    ("checkpoint", "Gravel Bike"),
    ("diadora", "Hybrid Bike"),
    ("ghost", "Mountain Bike"),
    ("kato", "Mountain Bike"),
    ("eastern", "BMX Bike"),
    ("gotrax", "Electric Scooter"),
    ("felt", "Road Bike"),
    ("cinder cone", "Mountain Bike"),
    ("fuji", "Road Bike"),
    ("talon", "Mountain Bike"),
    ("nakamura", "Mountain Bike"),
    ("cannondale", "Road Bike"),
    ("ctm", "Mountain Bike"),
    ("reebok", "Hybrid Bike"),
    ("sonar", "Hybrid Bike"),
    ("enduro", "Mountain Bike"),
    ("marin", "Mountain Bike"),
    ("mongoose", "Mountain Bike"),
    ("rize", "Electric Bike"),
    ("jamis", "Road Bike"),
    ("s-works", "Road Bike"),
    ("marlin", "Mountain Bike"),
    ("stagger", "Road Bike"),
    ("sanctuary", "Cruiser Bike"),
    ("honey stinger", "Mountain Bike"),
    ("aquila", "Road Bike"),
    ("santa cruz", "Mountain Bike"),
    ("surface 604", "Electric Bike"),
    ("khs bicycles", "Mountain Bike"),
    ("evo", "Hybrid Bike"),
    ("scott", "Road Bike"),
    ("subrosa", "BMX Bike"),
    ("gary fisher", "Mountain Bike"),
    ("colnago", "Road Bike"),
    ("escape", "Hybrid Bike"),
    ("miyata", "Road Bike"),
    ("cult", "BMX Bike"),
    ("haro", "BMX Bike"),
    ("iron horse bicycles", "Mountain Bike"),
    ("linus", "City Bike"),
    ("sekine", "Road Bike"),
    ("lemond racing cycles", "Road Bike"),
    ("pro", "Road Bike"),
];

/// Classify a free-text title into a category.
///
/// A title can contain several brand keys, so the lookup must be
/// deterministic: the longest matching key wins, ties break
/// lexicographically. No match returns [`DEFAULT_CATEGORY`].
pub fn classify(title: &str) -> &'static str {
    let title = title.to_lowercase();

    let mut best: Option<(&'static str, &'static str)> = None;
    for &(brand, category) in BRAND_CATEGORIES {
        if !title.contains(brand) {
            continue;
        }
        let better = match best {
            None => true,
            Some((current, _)) => {
                brand.len() > current.len() || (brand.len() == current.len() && brand < current)
            }
        };
        if better {
            best = Some((brand, category));
        }
    }

    best.map_or(DEFAULT_CATEGORY, |(_, category)| category)
}
