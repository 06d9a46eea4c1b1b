mod sensor_row;

pub use sensor_row::*;
