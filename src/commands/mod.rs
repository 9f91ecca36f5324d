pub mod exon_qc;
