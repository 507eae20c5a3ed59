/*
 * // Copyright (c) Radzivon Bartoshyk 10/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use moxjar::{
    JarCell, dot, dot_f32, lin_to_log, log_to_lin, log_to_lin_accurate, matmul, matmul_f32,
    matmul_v, matvec, matvec_f32, matvec_v,
};
use rand::Rng;

const VAL_LO: f32 = -2.0;
const VAL_HI: f32 = 2.0;

fn init_values(size: usize) -> Vec<f32> {
    let mut rng = rand::rng();
    (0..size).map(|_| rng.random_range(VAL_LO..VAL_HI)).collect()
}

/// Encodes every value into the log domain and replaces the float with the
/// exact linear value the encoding holds, so both sides of a comparison start
/// from identical inputs.
fn canonicalize(vals: &mut [f32]) -> Vec<JarCell> {
    let mut cells = Vec::with_capacity(vals.len());
    for v in vals.iter_mut() {
        let c = lin_to_log(JarCell::from_f32(*v));
        *v = log_to_lin_accurate(c);
        cells.push(c);
    }
    cells
}

fn test_round_trip(size: usize) {
    println!("Test: round-trip behavior log -> linear -> log");
    let mut vals = init_values(size);
    let cells = canonicalize(&mut vals);
    for x in cells {
        let y = lin_to_log(log_to_lin(x));
        println!("   start with    {x:?}");
        println!("   after trip    {y:?}");
        println!();
    }
}

fn test_conversion(size: usize) {
    println!("Test: accuracy of the log -> linear conversion");
    println!("   The table conversion carries 5 fraction bits; the accurate");
    println!("   conversion evaluates exp2 in full binary32.");
    let mut vals = init_values(size);
    let cells = canonicalize(&mut vals);
    for (x, v) in cells.iter().zip(vals.iter()) {
        let (sign, m, f) = x.log_components();
        println!("    log content                {x:?}");
        println!("    sign is {sign}, m is {m}, f is {f:.6}");
        println!("    table conversion        is {:.6e}", log_to_lin(*x).value());
        println!("    accurate conversion     is {:.6e}", v);
        println!();
    }
}

fn test_dotprod(size: usize) {
    println!("Test: inner product in the log domain against binary32");
    let mut a_vals = init_values(size);
    let mut b_vals = init_values(size);
    let a = canonicalize(&mut a_vals);
    let b = canonicalize(&mut b_vals);

    let jar = log_to_lin_accurate(dot(&a, &b).unwrap());
    let fp = dot_f32(&a_vals, &b_vals);

    println!("Log-domain dot product, accurately converted, is {jar:.6e}");
    println!("Dot product in binary32 arithmetic            is {fp:.6e}");
}

fn report_diff(label: &str, jar: &[JarCell], fp: &[f32]) {
    let mut max_abs = 0f32;
    let mut l1_jar = 0f32;
    let mut l1_fp = 0f32;
    for (j, f) in jar.iter().zip(fp.iter()) {
        let v = log_to_lin_accurate(*j);
        max_abs = max_abs.max((v - f).abs());
        l1_jar += v.abs();
        l1_fp += f.abs();
    }
    println!("{label}: max abs diff {max_abs:.6e}, L1 {l1_jar:.6e} vs binary32 L1 {l1_fp:.6e}");
}

fn test_matvecmul(m: usize, k: usize) {
    println!("Test: matrix-vector product in the log domain against binary32");
    let mut a_vals = init_values(m * k);
    let mut b_vals = init_values(k);
    let a = canonicalize(&mut a_vals);
    let b = canonicalize(&mut b_vals);

    let mut c = vec![JarCell::ZERO; m];
    let mut cv = vec![JarCell::ZERO; m];
    matvec(m, k, &a, &b, &mut c).unwrap();
    matvec_v(m, k, &a, &b, &mut cv).unwrap();

    let mut c_fp = vec![0f32; m];
    matvec_f32(m, k, &a_vals, &b_vals, &mut c_fp);

    report_diff("scalar", &c, &c_fp);
    report_diff("vector", &cv, &c_fp);
}

fn test_matmul(m: usize, n: usize, k: usize) {
    println!("Test: matrix-matrix product in the log domain against binary32");
    let mut a_vals = init_values(m * k);
    let mut b_vals = init_values(k * n);
    let a = canonicalize(&mut a_vals);
    let b = canonicalize(&mut b_vals);

    let mut c = vec![JarCell::ZERO; m * n];
    let mut cv = vec![JarCell::ZERO; m * n];
    matmul(m, n, k, &a, &b, &mut c).unwrap();
    matmul_v(m, n, k, &a, &b, &mut cv).unwrap();

    let mut c_fp = vec![0f32; m * n];
    matmul_f32(m, n, k, &a_vals, &b_vals, &mut c_fp);

    report_diff("scalar", &c, &c_fp);
    report_diff("vector", &cv, &c_fp);
}

fn print_help() {
    println!();
    println!("This tester can run multiple tests, selected by the first integer argument");
    println!("  0 : round-trip behavior log -> linear -> log");
    println!("  1 : accuracy of the log -> linear conversion");
    println!("  2 : inner product");
    println!("  3 : matrix-vector multiplication");
    println!("  4 : matrix-matrix multiplication");
    println!();
    println!("each of them requires additional integer parameters:");
    println!("  0,1,2 : one additional integer specifying N (length of array to test)");
    println!("  3     : two additional integers specifying M, K");
    println!("  4     : three additional integers specifying M, N, K");
    println!();
    println!("Examples:");
    println!("   app 0 20");
    println!("   app 1 30");
    println!("   app 2 50");
    println!("   app 3 16 50");
    println!("   app 4 16 24 50");
    println!();
}

fn parse(arg: &str) -> Option<usize> {
    arg.parse::<usize>().ok()
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    match args.len() {
        3 => match (parse(&args[1]), parse(&args[2])) {
            (Some(0), Some(size)) => test_round_trip(size),
            (Some(1), Some(size)) => test_conversion(size),
            (Some(2), Some(size)) => test_dotprod(size),
            _ => print_help(),
        },
        4 => match (parse(&args[1]), parse(&args[2]), parse(&args[3])) {
            (Some(3), Some(m), Some(k)) => test_matvecmul(m, k),
            _ => print_help(),
        },
        5 => match (
            parse(&args[1]),
            parse(&args[2]),
            parse(&args[3]),
            parse(&args[4]),
        ) {
            (Some(4), Some(m), Some(n), Some(k)) => test_matmul(m, n, k),
            _ => print_help(),
        },
        _ => print_help(),
    }
}
