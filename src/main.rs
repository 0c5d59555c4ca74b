//! Interactive terminal front end for the incident verification.
//!
//! Reproduces the original OBI companion program: a welcome banner, a
//! retry-until-valid prompt for the user count, one verbatim line per
//! password, and a re-run question after each verification. Only the count
//! prompt retries; a rejected password list prints its diagnostic and moves
//! on.

use std::io::{self, Write};

use colored::Colorize;
use secrecy::SecretString;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use pwd_incidents::{parse_user_count, verify_incidents_tx};

const DIVIDER_WIDTH: usize = 60;

type StdinLines = Lines<BufReader<Stdin>>;

fn print_banner() {
    let divider = "-".repeat(DIVIDER_WIDTH);

    println!("{}", divider.bright_blue());
    println!(
        "{}",
        "FALHA DE SEGURANÇA - OBI 2021 - Nível 2 - FASE 3".bright_blue()
    );
    println!("{}", divider.bright_blue());
    println!(
        "{}",
        "Este programa implementa a solução para o problema \"Falha de Segurança\" da XXIV \
         Olimpíada Brasileira de Informática (2021), Fase 3, consistente na verificação do \
         número de pares ordenados (A,B) distintos de usuários tal que o usuário A, usando sua \
         senha, consegue acesso à conta do usuário B. No caso, há uma falha de segurança no \
         sistema, na qual se a senha digitada contiver, como subcadeia contígua, a senha \
         correta, o sistema permite, indevidamente, o acesso.\n"
            .bright_blue()
    );
    println!(
        "{}",
        "Link para a página do problema: https://olimpiada.ic.unicamp.br/pratique/p2/2021/f3/falha/"
            .bright_blue()
    );
    println!("{}", divider.bright_blue());
}

/// Prompts for the user count until it parses; `None` on end of input.
async fn prompt_user_count(lines: &mut StdinLines) -> io::Result<Option<usize>> {
    loop {
        println!("{}", "Digite o número de usuários do sistema (N):".green());

        let Some(line) = lines.next_line().await? else {
            return Ok(None);
        };

        match parse_user_count(&line) {
            Ok(count) => return Ok(Some(count)),
            Err(error) => println!("{}", error.to_string().red()),
        }
    }
}

/// Reads exactly `count` password lines, verbatim; `None` on end of input.
async fn prompt_passwords(
    lines: &mut StdinLines,
    count: usize,
) -> io::Result<Option<Vec<SecretString>>> {
    let instruction = if count == 1 {
        "Digite a senha do usuário do sistema.".to_string()
    } else {
        format!(
            "Digite a senha de cada usuário no sistema ({count} usuários), uma por linha. O \
             programa vai parar quando a quantidade de senhas digitadas for igual à de usuários."
        )
    };
    println!("{}", instruction.blue());

    let mut passwords = Vec::with_capacity(count);
    while passwords.len() < count {
        let Some(line) = lines.next_line().await? else {
            return Ok(None);
        };
        passwords.push(SecretString::new(line.into()));
    }

    Ok(Some(passwords))
}

/// Asks whether to run another verification; `None` on end of input.
async fn prompt_continue(lines: &mut StdinLines) -> io::Result<Option<bool>> {
    print!(
        "Deseja fazer outra verificação? (digite S para \"sim\" ou qualquer outra tecla para \"não\"): "
    );
    io::stdout().flush()?;

    let Some(answer) = lines.next_line().await? else {
        return Ok(None);
    };

    Ok(Some(answer.eq_ignore_ascii_case("s")))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> io::Result<()> {
    print_banner();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let Some(count) = prompt_user_count(&mut lines).await? else {
            break;
        };
        let Some(passwords) = prompt_passwords(&mut lines, count).await? else {
            break;
        };

        let (tx, mut rx) = mpsc::channel(1);
        verify_incidents_tx(count, &passwords, CancellationToken::new(), tx).await;

        if let Some(verdict) = rx.recv().await {
            println!("{}", verdict.to_string().yellow());
        }

        match prompt_continue(&mut lines).await? {
            Some(true) => continue,
            _ => {
                println!("Programa encerrado.");
                break;
            }
        }
    }

    Ok(())
}
