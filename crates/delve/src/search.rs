pub mod base;
pub mod tavily;

#[cfg(test)]
pub mod mock;
