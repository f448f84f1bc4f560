use thiserror::Error;

#[derive(Error, Debug)]
pub enum RondelChartError {
    #[error("Dataset not found: `{0}`")]
    DatasetLookupError(usize),

    #[error("No datum at index {index} in dataset {dataset}")]
    DatumLookupError { dataset: usize, index: usize },
}
