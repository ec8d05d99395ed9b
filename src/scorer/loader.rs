use crate::error::SeoResult;
use crate::scorer::types::{ProductImage, ProductSeoInput};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{info, warn};

/// One line of a catalog export. Missing columns read as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogRow {
    title: String,
    meta_title: String,
    meta_description: String,
    short_description: String,
    description: String,
    slug: String,
    focus_keyword: String,
    /// `|`-separated, one entry per image; an empty entry is an image without alt.
    image_alts: String,
}

impl From<CatalogRow> for ProductSeoInput {
    fn from(row: CatalogRow) -> Self {
        let images = if row.image_alts.is_empty() {
            Vec::new()
        } else {
            row.image_alts
                .split('|')
                .map(|alt| {
                    let alt = alt.trim();
                    ProductImage {
                        alt: (!alt.is_empty()).then(|| alt.to_string()),
                    }
                })
                .collect()
        };
        let keyword = row.focus_keyword.trim();

        ProductSeoInput {
            title: row.title,
            meta_title: row.meta_title,
            meta_description: row.meta_description,
            short_description: row.short_description,
            description: row.description,
            slug: row.slug,
            focus_keyword: (!keyword.is_empty()).then(|| keyword.to_string()),
            images,
            gsc_data: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<ProductSeoInput>),
    One(Box<ProductSeoInput>),
}

/// Reads a single product object or an array of products.
pub fn load_products_json<R: Read>(reader: R) -> SeoResult<Vec<ProductSeoInput>> {
    let parsed: OneOrMany = serde_json::from_reader(reader)?;
    Ok(match parsed {
        OneOrMany::Many(products) => products,
        OneOrMany::One(product) => vec![*product],
    })
}

pub fn load_products_csv<R: Read>(reader: R) -> SeoResult<Vec<ProductSeoInput>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut products = Vec::new();
    for (line, result) in rdr.deserialize::<CatalogRow>().enumerate() {
        match result {
            Ok(row) => products.push(row.into()),
            Err(e) => warn!("Skipping catalog row {}: {}", line + 2, e),
        }
    }
    Ok(products)
}

/// Loads a catalog, choosing the format from the file extension (`.csv`, JSON otherwise).
pub fn load_products_from_path<P: AsRef<Path>>(path: P) -> SeoResult<Vec<ProductSeoInput>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    let products = if is_csv {
        load_products_csv(reader)?
    } else {
        load_products_json(reader)?
    };
    info!("📚 Loaded {} product(s) from {}", products.len(), path.display());
    Ok(products)
}
