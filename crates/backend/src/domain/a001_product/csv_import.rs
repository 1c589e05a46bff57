//! Bulk product upload from CSV.
//!
//! Expected header: `name,description,imageUrl,category` (any case, columns in
//! any order, `image_url` accepted). Only `name` is required.

use contracts::domain::a001_product::aggregate::ProductDto;

#[derive(Debug, Clone, Copy, Default)]
struct Columns {
    name: Option<usize>,
    description: Option<usize>,
    image_url: Option<usize>,
    category: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> anyhow::Result<Self> {
        let mut columns = Columns::default();
        for (idx, header) in headers.iter().enumerate() {
            match header.trim().to_lowercase().as_str() {
                "name" => columns.name = Some(idx),
                "description" => columns.description = Some(idx),
                "imageurl" | "image_url" | "image" => columns.image_url = Some(idx),
                "category" => columns.category = Some(idx),
                _ => {}
            }
        }
        if columns.name.is_none() {
            anyhow::bail!("CSV header must contain a 'name' column");
        }
        Ok(columns)
    }
}

fn cell(record: &csv::StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| record.get(i))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse the whole file; any invalid row fails the import
pub fn parse_products(data: &[u8]) -> anyhow::Result<Vec<ProductDto>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(data);

    let columns = Columns::from_headers(reader.headers()?)?;
    let mut products = Vec::new();

    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        // header is line 1
        let line = idx + 2;
        if record.iter().all(|v| v.trim().is_empty()) {
            continue;
        }
        let dto = ProductDto {
            name: cell(&record, columns.name).unwrap_or_default(),
            description: cell(&record, columns.description),
            image_url: cell(&record, columns.image_url),
            category: cell(&record, columns.category),
        };
        dto.validate()
            .map_err(|e| anyhow::anyhow!("Line {}: {}", line, e))?;
        products.push(dto);
    }

    if products.is_empty() {
        anyhow::bail!("CSV file contains no products");
    }
    Ok(products)
}
