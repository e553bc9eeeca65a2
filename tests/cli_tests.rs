//! End-to-end tests for the align-accuracy command-line interface.
//!
//! Each test writes small inputs to temporary files and checks the exact
//! output of one subcommand.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn temp_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut temp = NamedTempFile::with_suffix(suffix).expect("Failed to create temp file");
    temp.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    temp.flush().expect("Failed to flush temp file");
    temp
}

fn align_accuracy() -> Command {
    Command::cargo_bin("align-accuracy").expect("Binary should be built")
}

fn repeat(base: char, count: usize) -> String {
    std::iter::repeat(base).take(count).collect()
}

/// Reads of length 100, 100 and 40 as FASTQ
fn reads_fastq() -> NamedTempFile {
    let mut fastq = String::new();
    for (name, length) in [("read_c", 100), ("read_a", 100), ("read_b", 40)] {
        fastq.push_str(&format!(
            "@{name} runid=1\n{}\n+\n{}\n",
            repeat('A', length),
            repeat('I', length)
        ));
    }
    temp_file(".fastq", &fastq)
}

#[test]
fn test_identity_table() {
    let reads = reads_fastq();
    // read_a: full-length 95% alignment
    // read_c: only 30 of 100 bases aligned -> unaligned
    // read_b: no alignment at all
    let paf = temp_file(
        ".paf",
        "read_a\t100\t0\t100\t+\tchr1\t5000\t0\t100\t95\t100\ttp:A:P\n\
         read_c\t100\t10\t40\t+\tchr1\t5000\t200\t230\t24\t30\n\
         short\trow\n",
    );

    align_accuracy()
        .args(["identity"])
        .arg(reads.path())
        .arg(paf.path())
        .assert()
        .success()
        .stdout(
            "Name\tLength\tIdentity\tRelative length\n\
             read_a\t100\t95.0\t100.0\n\
             read_b\t40\t0.0\t\n\
             read_c\t100\t0.0\t\n",
        );
}

#[test]
fn test_identity_overlapping_alignments() {
    let reads = temp_file(".fasta", &format!(">read1\n{}\n", repeat('C', 100)));
    // 0..60 at 70%, 40..100 at 90%: overlap takes 90 -> (40*70 + 60*90) / 100 = 82
    let paf = temp_file(
        ".paf",
        "read1\t100\t0\t60\t+\tchr1\t5000\t0\t60\t42\t60\n\
         read1\t100\t40\t100\t+\tchr1\t5000\t40\t100\t54\t60\n",
    );

    align_accuracy()
        .args(["identity"])
        .arg(reads.path())
        .arg(paf.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("read1\t100\t82.0\t100.0\n"));
}

#[test]
fn test_identity_json() {
    let reads = temp_file(".fasta", &format!(">read1\n{}\n", repeat('G', 100)));
    let paf = temp_file(".paf", "read1\t100\t0\t100\t+\tchr1\t5000\t0\t100\t95\t100\n");

    align_accuracy()
        .args(["--format", "json", "identity"])
        .arg(reads.path())
        .arg(paf.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"identity\": 95.0"))
        .stdout(predicate::str::contains("\"relative_length\": 100.0"));
}

#[test]
fn test_identity_length_mismatch_fails() {
    let reads = reads_fastq();
    let paf = temp_file(".paf", "read_a\t99\t0\t99\t+\tchr1\t5000\t0\t99\t95\t99\n");

    align_accuracy()
        .args(["identity"])
        .arg(reads.path())
        .arg(paf.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("read_a"));
}

#[test]
fn test_identity_zero_block_fails() {
    let reads = reads_fastq();
    let paf = temp_file(".paf", "read_a\t100\t0\t100\t+\tchr1\t5000\t0\t100\t0\t0\n");

    align_accuracy()
        .args(["identity"])
        .arg(reads.path())
        .arg(paf.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("alignment block of length 0"));
}

fn snps_row(ref_base: &str, query_base: &str, context: &str, r_contig: &str, q_contig: &str) -> String {
    format!("100\t{ref_base}\t{query_base}\t100\t5\t100\t1\t1000\t{context}\t{context}\t1\t1\t{r_contig}\t{q_contig}\n")
}

#[test]
fn test_error_rates() {
    let mut snps = String::new();
    snps.push_str(&snps_row("A", ".", "ACGAAAGCT", "chromosome", "tig01")); // homo del
    snps.push_str(&snps_row(".", "A", "TTTTATTT", "chromosome", "tig01")); // homo ins
    snps.push_str(&snps_row("A", "G", "TGCAACGTT", "chromosome", "tig01")); // sub
    snps.push_str(&snps_row("A", "G", "TCCAGGTTT", "chromosome", "tig01")); // dcm
    snps.push_str(&snps_row("A", ".", "ACGTAAGCT", "chromosome", "tig01")); // other del
    snps.push_str(&snps_row("A", "G", "TGCAACGTT", "plasmid", "tig02")); // ignored
    let snps = temp_file(".snps", &snps);

    align_accuracy()
        .args(["errors"])
        .arg(snps.path())
        .args(["chromosome", "tig01"])
        .assert()
        .success()
        .stdout("0.0010000\t0.0010000\t0.0010000\t0.0010000\t0.0000000\t0.0010000\n");
}

#[test]
fn test_error_rates_from_stdin_with_header() {
    let snps = snps_row(".", "T", "GCAT.CTGC", "chromosome", "tig01");

    align_accuracy()
        .args(["errors", "-", "chromosome", "tig01", "--header"])
        .write_stdin(snps)
        .assert()
        .success()
        .stdout(
            "dcm\thomo del\thomo ins\tother del\tother ins\tsub\n\
             0.0000000\t0.0000000\t0.0000000\t0.0000000\t0.0010000\t0.0000000\n",
        );
}

#[test]
fn test_error_rates_without_variants() {
    let snps = temp_file(".snps", &snps_row("A", "G", "TGCAACGTT", "plasmid", "tig02"));

    align_accuracy()
        .args(["errors"])
        .arg(snps.path())
        .args(["chromosome", "tig01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--reference-length"));

    align_accuracy()
        .args(["errors"])
        .arg(snps.path())
        .args(["chromosome", "tig01", "--reference-length", "5000"])
        .assert()
        .success()
        .stdout("0.0000000\t0.0000000\t0.0000000\t0.0000000\t0.0000000\t0.0000000\n");
}

#[test]
fn test_median() {
    let table = temp_file(
        ".tsv",
        "Name\tLength\tIdentity\tRelative length\n\
         read_a\t100\t95.0\t100.0\n\
         read_b\t100\t85.0\t99.0\n\
         read_c\t100\t0.0\t\n",
    );

    align_accuracy()
        .args(["median"])
        .arg(table.path())
        .assert()
        .success()
        .stdout("85.0\n");

    // Padding to 4 sequences: [0, 0, 85, 95] -> 42.5
    align_accuracy()
        .args(["median"])
        .arg(table.path())
        .args(["--total", "4"])
        .assert()
        .success()
        .stdout("42.5\n");
}

#[test]
fn test_chop() {
    let assembly = temp_file(".fasta", ">contig1\nACGTACGTAC\n>contig2\nGGGGCC\n");

    align_accuracy()
        .args(["chop"])
        .arg(assembly.path())
        .arg("4")
        .assert()
        .success()
        .stdout(">1\nACGT\n>2\nACGT\n>3\nGGGG\n");
}

#[test]
fn test_chop_rejects_zero_piece_size() {
    let assembly = temp_file(".fasta", ">contig1\nACGT\n");

    align_accuracy()
        .args(["chop"])
        .arg(assembly.path())
        .arg("0")
        .assert()
        .failure();
}
