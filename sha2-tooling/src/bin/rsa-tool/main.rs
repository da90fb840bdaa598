use std::io;

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use toy_rsa::{decrypt, encrypt, generate_keys, BigUint, PrivateKey, PublicKey};

use sha2_tooling::demo::{hash_demo, rsa_demo};

fn number_arg(name: &'static str, help: &'static str) -> Arg<'static> {
    Arg::new(name)
        .long(name)
        .help(help)
        .required(true)
        .takes_value(true)
}

fn number(matches: &ArgMatches, name: &str) -> Result<BigUint> {
    let raw = matches
        .value_of(name)
        .with_context(|| format!("missing --{}", name))?;
    raw.parse::<BigUint>()
        .with_context(|| format!("--{} is not a non-negative integer: {}", name, raw))
}

fn main() -> Result<()> {
    fil_logger::init();

    let keygen_cmd = Command::new("keygen")
        .about("Derive a key pair from two primes")
        .arg(number_arg("p", "First prime"))
        .arg(number_arg("q", "Second prime"));

    let encrypt_cmd = Command::new("encrypt")
        .about("Compute message^e mod n")
        .arg(number_arg("e", "Public exponent"))
        .arg(number_arg("n", "Modulus"))
        .arg(number_arg("message", "Message, below n"));

    let decrypt_cmd = Command::new("decrypt")
        .about("Compute ciphertext^d mod n")
        .arg(number_arg("d", "Private exponent"))
        .arg(number_arg("n", "Modulus"))
        .arg(number_arg("ciphertext", "Ciphertext, below n"));

    let demo_cmd = Command::new("demo").about("Run the p = 37, q = 97 walkthrough");

    let matches = Command::new("rsa-tool")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Textbook RSA, for illustration only")
        .subcommand(keygen_cmd)
        .subcommand(encrypt_cmd)
        .subcommand(decrypt_cmd)
        .subcommand(demo_cmd)
        .subcommand_required(true)
        .get_matches();

    match matches.subcommand() {
        Some(("keygen", m)) => {
            let (public, private) = generate_keys(&number(m, "p")?, &number(m, "q")?)?;
            println!("public key:  {}", public);
            println!("private key: {}", private);
        }
        Some(("encrypt", m)) => {
            let key = PublicKey {
                e: number(m, "e")?,
                n: number(m, "n")?,
            };
            println!("{}", encrypt(&number(m, "message")?, &key)?);
        }
        Some(("decrypt", m)) => {
            let key = PrivateKey {
                d: number(m, "d")?,
                n: number(m, "n")?,
            };
            println!("{}", decrypt(&number(m, "ciphertext")?, &key)?);
        }
        Some(("demo", _)) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            hash_demo(&mut out)?;
            rsa_demo(&mut out)?;
        }
        _ => unreachable!("a subcommand is required"),
    }

    Ok(())
}
