mod assignability;
mod canonicalization;
mod values;
