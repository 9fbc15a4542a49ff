//! Static fixtures used across harnesses.

use cinedex_core::Catalog;

/// A small catalog with a single prison movie, several "The …" titles, one
/// comedy and two sci-fi entries.
pub const SAMPLE_MOVIES_JSON: &str = r#"[
  {"id": 1, "movieName": "The Prison Escape", "director": "Frank Marlowe", "year": 1994, "genre": "Drama",
   "description": "Two imprisoned men bond over a number of years.", "duration": 142, "imdbRating": 5.0},
  {"id": 2, "movieName": "The Family Boss", "director": "Francesca Coppell", "year": 1972, "genre": "Crime/Drama",
   "description": "A crime dynasty changes hands.", "duration": 175, "imdbRating": 5.0},
  {"id": 3, "movieName": "Dream Heist", "director": "Christopher Nolde", "year": 2010, "genre": "Sci-Fi/Action",
   "description": "A thief plants an idea inside a dream.", "duration": 148, "imdbRating": 4.5},
  {"id": 4, "movieName": "The Virtual World", "director": "Lana Wachter", "year": 1999, "genre": "Sci-Fi/Action",
   "description": "A hacker learns the truth about his reality.", "duration": 136, "imdbRating": 4.5},
  {"id": 5, "movieName": "Buccaneer's Gold", "director": "Morgan Blackwell", "year": 2003, "genre": "Adventure/Comedy",
   "description": "A movie about a cursed crew and the film's director.", "duration": 143, "imdbRating": 4.0}
]"#;

pub fn sample_catalog() -> Catalog {
    Catalog::from_json(SAMPLE_MOVIES_JSON).expect("sample fixture must parse")
}

/// Probe texts that must switch pirate mode on.
pub const PIRATE_PROBES: &[&str] = &[
    "pirate",
    "PIRATE",
    "arrr",
    "ahoy",
    "treasure",
    "I love pirate movies",
    "Ahoy there",
];

/// Probe texts that must leave pirate mode off.
pub const PLAIN_PROBES: &[&str] = &["regular movie", "drama", "", "Prison", "pi rate"];
