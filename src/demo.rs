//! The fixed demonstration script run by the binary.

use std::io::Write;

use anyhow::Result;

use crate::db::Directory;
use crate::models::{ClientChanges, ClientFilter};

/// A hardcoded client to bulk-load.
#[derive(Debug, Clone, Copy)]
pub struct SeedClient {
    pub last_name: &'static str,
    pub first_name: &'static str,
    pub phones: &'static str,
    pub email: &'static str,
}

const fn seed(
    last_name: &'static str,
    first_name: &'static str,
    phones: &'static str,
    email: &'static str,
) -> SeedClient {
    SeedClient {
        last_name,
        first_name,
        phones,
        email,
    }
}

pub const SEED_CLIENTS: [SeedClient; 20] = [
    seed("Якуткина", "Ирина", "+7 (967) 561-68-69, +7 (977) 851-89-62", "irina1190@gmail.com"),
    seed("Драчёва", "Настасья", "+7 (912) 250-28-41", "nastasya59@hotmail.com"),
    seed("Щербинин", "Феликс", "+7 (979) 719-94-13", "feliks1960@outlook.com"),
    seed("Канадов", "Иннокентий", "+7 (934) 404-64-15, +7 (940) 652-45-87", "innokentiy17031971@gmail.com"),
    seed("Сазонтов", "Кирилл", "+7 (958) 163-91-54", "kirill11111978@ya.ru"),
    seed("Никанорова", "Милана", "+7 (977) 441-85-25", "milana8702@outlook.com"),
    seed("Еремеев", "Тимофей", "+7 (989) 686-86-83, +7 (953) 344-23-19", "timofey1982@mail.ru"),
    seed("Жутов", "Давид", "+7 (972) 507-63-27", "david82@mail.ru"),
    seed("Бебчук", "Мила", "+7 (915) 373-83-49", "mila23081985@ya.ru"),
    seed("Клима", "Варвара", "+7 (906) 878-14-63", "varvara06031966@hotmail.com"),
    seed("Углицкий", "Иван", "+7 (963) 428-18-95", "ivan30@yandex.ru"),
    seed("Лачков", "Степан", "+7 (995) 495-44-13", "stepan1962@mail.ru"),
    seed("Шихина", "Екатерина", "+7 (994) 332-24-99", "ekaterina1992@ya.ru"),
    seed("Дасаев", "Петр", "+7 (963) 761-17-33", "petr.dasaev@gmail.com"),
    seed("Максимова", "Арина", "+7 (915) 714-95-53, +7 (993) 395-58-24", "arina03101983@mail.ru"),
    seed("Цирульников", "Тарас", "+7 (912) 806-10-22", "taras26121985@rambler.ru"),
    seed("Хрустицкий", "Савва", "+7 (946) 370-28-67", "savva.hrustickiy@outlook.com"),
    seed(
        "Валеева",
        "Людмила",
        "+7 (987) 765-99-55, +7 (993) 124-98-21, +7 (966) 712-24-43",
        "lyudmila2793@rambler.ru",
    ),
    seed("Зайкова", "София", "+7 (992) 101-93-90", "sofiya.zaykova@mail.ru"),
    seed("Эристова", "Полина", "+7 (949) 161-46-22", "polina24111981@hotmail.com"),
];

pub const DEMO_LAST_NAME: &str = "Еремеев";
pub const DEMO_REMOVED_PHONE: &str = "+7 (953) 344-23-19";
pub const DEMO_ADDED_PHONE: &str = "+7 (923) 309-94-35";
pub const DEMO_NEW_LAST_NAME: &str = "Еркулаев";

/// Load every seed client, reporting failures and carrying on. Returns how many were added.
pub async fn load_seed(directory: &Directory, out: &mut impl Write) -> Result<usize> {
    let mut added = 0;

    for client in SEED_CLIENTS {
        match directory
            .add_client(client.first_name, client.last_name, client.email, Some(client.phones))
            .await
        {
            Ok(_) => added += 1,
            Err(err) => writeln!(
                out,
                "Failed to add {} {}: {}",
                client.last_name, client.first_name, err
            )?,
        }
    }
    writeln!(out, "Loaded {added} of {} clients", SEED_CLIENTS.len())?;

    Ok(added)
}

/// Look up one client, swap a phone, rename them and finally delete them.
///
/// Operation failures are printed and the script moves on; only write errors
/// on `out` abort it.
pub async fn run_lookup_sequence(directory: &Directory, out: &mut impl Write) -> Result<()> {
    let found = match directory
        .find_client(&ClientFilter::new().last_name(DEMO_LAST_NAME))
        .await
    {
        Ok(found) => found,
        Err(err) => {
            writeln!(out, "Lookup of \"{DEMO_LAST_NAME}\" failed: {err}")?;
            return Ok(());
        }
    };
    let Some(record) = found.first() else {
        writeln!(out, "No client named \"{DEMO_LAST_NAME}\"")?;
        return Ok(());
    };

    let client_id = record.id();
    let full_name = record.full_name();
    writeln!(
        out,
        "Found: {full_name} contacts: {} {}",
        record.client.email,
        record.phones.join(", ")
    )?;

    match directory.delete_phone(client_id, DEMO_REMOVED_PHONE).await {
        Ok(true) => writeln!(out, "Phone \"{DEMO_REMOVED_PHONE}\" of \"{full_name}\" deleted")?,
        Ok(false) => writeln!(out, "\"{full_name}\" has no phone \"{DEMO_REMOVED_PHONE}\"")?,
        Err(err) => writeln!(
            out,
            "Failed to delete phone \"{DEMO_REMOVED_PHONE}\" of \"{full_name}\": {err}"
        )?,
    }

    match directory.add_phone(client_id, DEMO_ADDED_PHONE).await {
        Ok(()) => writeln!(out, "Added phone \"{DEMO_ADDED_PHONE}\" to \"{full_name}\"")?,
        Err(err) => writeln!(
            out,
            "Failed to add phone \"{DEMO_ADDED_PHONE}\" to \"{full_name}\": {err}"
        )?,
    }

    let rename = ClientChanges::new().last_name(DEMO_NEW_LAST_NAME);
    match directory.change_client(client_id, &rename).await {
        Ok(()) => writeln!(out, "Profile client_id=\"{client_id}\" updated")?,
        Err(err) => writeln!(out, "Failed to update profile \"{client_id}\": {err}")?,
    }

    match directory.delete_client(client_id).await {
        Ok(()) => writeln!(out, "\"{full_name}\" deleted")?,
        Err(err) => writeln!(out, "Failed to delete \"{full_name}\": {err}")?,
    }

    Ok(())
}
