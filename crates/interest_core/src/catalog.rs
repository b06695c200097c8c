//! The fixed catalog of selectable interest tags and its display grouping.

/// Every selectable interest, in display order.
pub const INTERESTS: [&str; 44] = [
    "Adventure",
    "Sports",
    "Gaming",
    "Technology",
    "Music",
    "Cooking",
    "Fitness",
    "Travel",
    "Art",
    "Movies",
    "Books",
    "Science",
    "Fashion",
    "Photography",
    "DIY",
    "Nature",
    "History",
    "Food",
    "Cars",
    "Anime",
    "Pets",
    "Comedy",
    "Education",
    "Lifestyle",
    "Dance",
    "Writing",
    "Gardening",
    "Space",
    "Hiking",
    "Yoga",
    "Podcasts",
    "Crafts",
    "Meditation",
    "Sustainability",
    "Architecture",
    "Board Games",
    "Camping",
    "Fitness Tech",
    "Vlogging",
    "Retro Gaming",
    "Minimalism",
    "Astrology",
    "Knitting",
    "Skiing",
];

/// Number of tags shown in each display row. Sums to `INTERESTS.len()`.
pub const ROW_PATTERN: [usize; 8] = [3, 4, 5, 4, 5, 4, 5, 3];

/// Splits the catalog into display rows following [`ROW_PATTERN`].
pub fn rows() -> Vec<&'static [&'static str]> {
    let mut start = 0;
    ROW_PATTERN
        .iter()
        .map(|&count| {
            let end = (start + count).min(INTERESTS.len());
            let row = &INTERESTS[start..end];
            start = end;
            row
        })
        .collect()
}

/// Resolves a user-typed name to its canonical catalog spelling.
pub fn lookup(name: &str) -> Option<&'static str> {
    let name = name.trim();
    INTERESTS
        .iter()
        .copied()
        .find(|tag| tag.eq_ignore_ascii_case(name))
}
