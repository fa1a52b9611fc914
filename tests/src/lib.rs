#[cfg(test)]
mod accrual;
#[cfg(test)]
mod utils;
