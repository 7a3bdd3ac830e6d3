mod endian_harness;
mod v5_harness;
