use super::artist::ArtistRecord;

/// Built-in dataset used when no candidate source yields usable data.
///
/// Kept in popularity order so the degraded mode still looks like a real chart.
pub fn sample_artists() -> Vec<ArtistRecord> {
  vec![
    ArtistRecord::new(
      "Taylor Swift",
      &[
        "Global",
        "USA",
        "UK",
        "Canada",
        "Germany",
        "France",
        "Australia",
        "Netherlands",
        "Spain",
        "Italy",
        "Sweden",
        "Norway",
        "Denmark",
        "Belgium",
        "Switzerland",
        "Austria",
        "Ireland",
        "New Zealand",
      ],
    ),
    ArtistRecord::new(
      "The Weeknd",
      &[
        "Global",
        "USA",
        "UK",
        "Canada",
        "Germany",
        "France",
        "Australia",
        "Netherlands",
        "Sweden",
        "Norway",
        "Denmark",
        "Belgium",
      ],
    ),
    ArtistRecord::new(
      "Bad Bunny",
      &["Global", "USA", "Spain", "Mexico", "Argentina", "Colombia", "Chile", "Brazil", "France", "Italy"],
    ),
    ArtistRecord::new(
      "Olivia Rodrigo",
      &["Global", "USA", "UK", "Canada", "Australia", "Germany", "France", "Netherlands", "New Zealand"],
    ),
    ArtistRecord::new(
      "Dua Lipa",
      &["Global", "UK", "Germany", "France", "Netherlands", "Belgium", "Italy", "Spain", "Austria"],
    ),
    ArtistRecord::new(
      "Harry Styles",
      &["Global", "USA", "UK", "Canada", "Australia", "Ireland", "Netherlands", "Germany"],
    ),
    ArtistRecord::new(
      "Ed Sheeran",
      &["Global", "UK", "Germany", "Netherlands", "Australia", "Ireland", "Canada", "Belgium"],
    ),
    ArtistRecord::new("Billie Eilish", &["Global", "USA", "UK", "Canada", "Germany", "France", "Australia"]),
    ArtistRecord::new("Drake", &["Global", "USA", "UK", "Canada", "Australia", "Germany", "France"]),
    ArtistRecord::new("Sabrina Carpenter", &["Global", "USA", "UK", "Canada", "Australia", "Germany"]),
    ArtistRecord::new("Post Malone", &["Global", "USA", "UK", "Canada", "Germany", "Australia"]),
    ArtistRecord::new("SZA", &["USA", "UK", "Canada", "Australia", "Germany"]),
    ArtistRecord::new("Chappell Roan", &["USA", "UK", "Canada", "Australia", "Netherlands"]),
    ArtistRecord::new("Ariana Grande", &["USA", "UK", "Canada", "Germany", "France"]),
    ArtistRecord::new("Lana Del Rey", &["USA", "UK", "France", "Germany"]),
    ArtistRecord::new("Bruno Mars", &["USA", "UK", "Australia", "Canada"]),
    ArtistRecord::new("Beyoncé", &["USA", "UK", "France", "Germany"]),
    ArtistRecord::new("Rihanna", &["USA", "UK", "Canada"]),
    ArtistRecord::new("Justin Bieber", &["Canada", "USA", "UK"]),
    ArtistRecord::new("Adele", &["UK", "Germany", "Netherlands"]),
  ]
}
