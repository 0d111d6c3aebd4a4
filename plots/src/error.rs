use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("{series} series exceed the palette ({capacity} series at most)")]
    PaletteExhausted { series: usize, capacity: usize },

    #[error("Plot drawing error: {0}")]
    Draw(String),

    #[error("Image encoding error: {0}")]
    Encode(String),
}

pub type Result<T> = std::result::Result<T, PlotError>;
