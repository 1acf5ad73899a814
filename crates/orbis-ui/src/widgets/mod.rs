pub mod quality_ring;
