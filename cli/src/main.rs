use lowexp_crypto::attack::{Sample, solve_direct};
use lowexp_crypto::errors::LowExpCryptoError;
use lowexp_crypto::preset::challenge::{
    CHALLENGE_CIPHERTEXT, CHALLENGE_EXPONENT, CHALLENGE_MODULUS,
};

use num_bigint::BigUint;

use std::process::ExitCode;

struct Args {
    modulus: Option<BigUint>,
    exponent: u32,
    ciphertext: Option<BigUint>,
    challenge: bool,
}

impl Args {
    fn parse(mut argv: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut args = Self {
            modulus: None,
            exponent: CHALLENGE_EXPONENT,
            ciphertext: None,
            challenge: false,
        };
        while let Some(flag) = argv.next() {
            match flag.as_str() {
                "--n" => args.modulus = Some(parse_value(&flag, argv.next())?),
                "--c" => args.ciphertext = Some(parse_value(&flag, argv.next())?),
                "--e" => {
                    let value = argv.next().ok_or_else(|| format!("{flag} expects a value"))?;
                    args.exponent = value
                        .parse()
                        .map_err(|_| format!("{flag} expects a small integer, got `{value}`"))?;
                }
                "--challenge" => args.challenge = true,
                other => return Err(format!("unknown argument `{other}`")),
            }
        }
        Ok(args)
    }
}

fn parse_value(flag: &str, value: Option<String>) -> Result<BigUint, String> {
    let value = value.ok_or_else(|| format!("{flag} expects a value"))?;
    BigUint::parse_bytes(value.as_bytes(), 10)
        .ok_or_else(|| format!("{flag} expects a decimal integer, got `{value}`"))
}

fn print_usage(program: &str) {
    println!("RSA small exponent attack solver");
    println!();
    println!("Usage: {program} [--n <modulus>] [--e <exponent>] [--c <ciphertext>] [--challenge]");
    println!();
    println!("Options:");
    println!("    --n <modulus>      RSA modulus");
    println!("    --e <exponent>     Public exponent (default: 3)");
    println!("    --c <ciphertext>   Ciphertext");
    println!("    --challenge        Run the built-in demonstration values");
    println!();
    println!("With no arguments the built-in demonstration runs.");
}

fn is_printable_ascii(bytes: &[u8]) -> bool {
    !bytes.is_empty() && bytes.iter().all(|byte| byte.is_ascii() && !byte.is_ascii_control())
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

fn report_plaintext(label: &str, plaintext: &[u8]) {
    log::debug!("recovered {} plaintext bytes", plaintext.len());
    if is_printable_ascii(plaintext) {
        println!("[+] {label}: {}", String::from_utf8_lossy(plaintext));
    } else {
        println!("[+] Decrypted (hex): {}", to_hex(plaintext));
    }
}

fn run_challenge() {
    let modulus = CHALLENGE_MODULUS.clone();
    let ciphertext = CHALLENGE_CIPHERTEXT.clone();

    println!("Modulus (n):     {modulus}");
    println!("Exponent (e):    {CHALLENGE_EXPONENT}");
    println!("Ciphertext (c):  {ciphertext}");
    println!();

    // c < n is necessary for the ciphertext to be an unreduced power
    if ciphertext < modulus {
        println!("[*] c < n: Direct integer root attack is viable");
    } else {
        println!("[!] c >= n: Direct root may not work, trying anyway...");
    }
    println!("[*] Computing integer cube root of ciphertext...");

    match solve_direct(&Sample::new(modulus, ciphertext), CHALLENGE_EXPONENT) {
        Ok(plaintext) => report_plaintext("Decrypted flag", &plaintext),
        Err(err) => {
            log::debug!("direct attack on the built-in capture failed: {err}");
            println!("[-] Direct root attack failed (m^e > n)");
            println!("[-] Try Hastad's broadcast attack with multiple ciphertexts");
        }
    }
}

fn main() -> ExitCode {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::init();

    let argv: Vec<String> = std::env::args().collect();
    let args = match Args::parse(argv.iter().skip(1).cloned()) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("Error: {message}");
            print_usage(&argv[0]);
            return ExitCode::from(2);
        }
    };

    if args.challenge || (args.modulus.is_none() && args.ciphertext.is_none()) {
        run_challenge();
        return ExitCode::SUCCESS;
    }

    let (Some(modulus), Some(ciphertext)) = (args.modulus, args.ciphertext) else {
        // one of --n/--c alone is not actionable
        print_usage(&argv[0]);
        return ExitCode::SUCCESS;
    };

    println!("[*] Attempting integer root attack with e={}", args.exponent);
    match solve_direct(&Sample::new(modulus, ciphertext), args.exponent) {
        Ok(plaintext) => {
            report_plaintext("Decrypted", &plaintext);
            ExitCode::SUCCESS
        }
        Err(LowExpCryptoError::NoExactRoot(_)) => {
            println!("[-] Attack failed. The message may be too large for direct root.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(1)
        }
    }
}
