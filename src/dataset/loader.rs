//! CSV loader.
//!
//! Reads the three-file layout the dataset ships in:
//!
//! | File         | Columns                |
//! |--------------|------------------------|
//! | `people.csv` | `id,name,birth`        |
//! | `movies.csv` | `id,title,year`        |
//! | `stars.csv`  | `person_id,movie_id`   |
//!
//! Header rows are required. Empty `birth`/`year` fields load as `None`.
//! A `stars.csv` row referencing an unknown person or movie is dropped by
//! the builder; a row that fails to parse at all is a real error.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::model::{Movie, Person};
use crate::Result;

use super::{Dataset, DatasetBuilder};

#[derive(Debug, Deserialize)]
struct PersonRecord {
    id: String,
    name: String,
    birth: Option<u16>,
}

#[derive(Debug, Deserialize)]
struct MovieRecord {
    id: String,
    title: String,
    year: Option<u16>,
}

#[derive(Debug, Deserialize)]
struct StarRecord {
    person_id: String,
    movie_id: String,
}

/// Load a dataset from a directory containing `people.csv`, `movies.csv`
/// and `stars.csv`.
pub fn load_dir(dir: impl AsRef<Path>) -> Result<Dataset> {
    let dir = dir.as_ref();
    let mut builder = Dataset::builder();
    load_people(dir, &mut builder)?;
    load_movies(dir, &mut builder)?;
    load_stars(dir, &mut builder)?;
    Ok(builder.build())
}

fn load_people(dir: &Path, builder: &mut DatasetBuilder) -> Result<()> {
    let path = dir.join("people.csv");
    let mut reader = csv::Reader::from_path(&path)?;
    let mut count = 0u64;
    for record in reader.deserialize() {
        let record: PersonRecord = record?;
        let mut person = Person::new(record.id, record.name);
        person.birth = record.birth;
        builder.add_person(person);
        count += 1;
    }
    debug!(%count, path = %path.display(), "loaded people");
    Ok(())
}

fn load_movies(dir: &Path, builder: &mut DatasetBuilder) -> Result<()> {
    let path = dir.join("movies.csv");
    let mut reader = csv::Reader::from_path(&path)?;
    let mut count = 0u64;
    for record in reader.deserialize() {
        let record: MovieRecord = record?;
        let mut movie = Movie::new(record.id, record.title);
        movie.year = record.year;
        builder.add_movie(movie);
        count += 1;
    }
    debug!(%count, path = %path.display(), "loaded movies");
    Ok(())
}

fn load_stars(dir: &Path, builder: &mut DatasetBuilder) -> Result<()> {
    let path = dir.join("stars.csv");
    let mut reader = csv::Reader::from_path(&path)?;
    let mut count = 0u64;
    for record in reader.deserialize() {
        let record: StarRecord = record?;
        if builder.add_membership(&record.person_id.into(), &record.movie_id.into()) {
            count += 1;
        }
    }
    debug!(%count, path = %path.display(), "loaded memberships");
    Ok(())
}
