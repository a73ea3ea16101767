#[cfg(test)]
#[path = "../../tests/unit/commands/register_test.rs"]
mod register_test;

use super::*;
use campaign_cli::pragmatic::format::messages::{MessageCatalog, deserialize_messages};
use campaign_cli::pragmatic::format::registration::*;

const FORM_ARG_NAME: &str = "FORM";
const ORG_ID_ARG_NAME: &str = "org-id";
const ORG_TITLE_ARG_NAME: &str = "org-title";
const MESSAGES_ARG_NAME: &str = "messages";
const STATUS_ARG_NAME: &str = "status";

pub fn get_register_app() -> Command {
    Command::new("register")
        .about("Validates sign up form and creates a registration request or reports its outcome")
        .arg(Arg::new(FORM_ARG_NAME).help("Sets the registration form file to use").required(true).index(1))
        .arg(Arg::new(ORG_ID_ARG_NAME).help("Specifies organization to register with").long(ORG_ID_ARG_NAME))
        .arg(
            Arg::new(ORG_TITLE_ARG_NAME)
                .help("Specifies organization title, organization id is used when not set")
                .long(ORG_TITLE_ARG_NAME)
                .requires(ORG_ID_ARG_NAME),
        )
        .arg(
            Arg::new(MESSAGES_ARG_NAME)
                .help("Specifies path to the message catalog file")
                .short('m')
                .long(MESSAGES_ARG_NAME),
        )
        .arg(
            Arg::new(STATUS_ARG_NAME)
                .help("Specifies status of already sent registration request")
                .short('s')
                .long(STATUS_ARG_NAME),
        )
        .arg(create_out_result_arg())
}

pub fn run_register(matches: &ArgMatches, out_writer_func: OutWriterFn) -> Result<(), String> {
    let form_path = get_required_value(matches, FORM_ARG_NAME)?;
    let form = deserialize_registration_form(BufReader::new(open_file(form_path, "registration form")?))
        .map_err(|errs| format!("cannot read registration form:\n{}", errs.to_json()))?;

    let organization = matches.get_one::<String>(ORG_ID_ARG_NAME).map(|id| Organization {
        id: id.clone(),
        title: matches.get_one::<String>(ORG_TITLE_ARG_NAME).unwrap_or(id).clone(),
    });

    let catalog = match matches.get_one::<String>(MESSAGES_ARG_NAME) {
        Some(path) => deserialize_messages(BufReader::new(open_file(path, "messages")?))
            .map_err(|errs| format!("cannot read messages:\n{}", errs.to_json()))?,
        None => MessageCatalog::default(),
    };

    let status = parse_int_value::<u16>(matches, STATUS_ARG_NAME, "response status")?;

    let outcome = process_registration(&form, organization.as_ref(), status, &catalog);

    let mut writer = get_out_writer(matches, out_writer_func)?;
    serialize_registration_outcome(&outcome, &mut writer).map_err(|err| format!("cannot write outcome: '{err}'"))?;
    writer.flush().map_err(|err| format!("cannot write outcome: '{err}'"))
}
