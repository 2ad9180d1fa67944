// ABOUTME: Team name canonicalization applied by both normalizers.
// ABOUTME: Collapses the source's long-form team names to the short names used everywhere downstream.

/// Raw-to-canonical team name pairs. Names not in this table pass through
/// unchanged.
pub const TEAM_ALIASES: &[(&str, &str)] = &[
    ("Alpine F1 Team", "Alpine"),
    ("Haas F1 Team", "Haas"),
];

/// Resolve a scraped team name to its canonical short form.
pub fn canonical_team(raw: &str) -> String {
    for (alias, canonical) in TEAM_ALIASES {
        if raw == *alias {
            return (*canonical).to_string();
        }
    }
    raw.to_string()
}
