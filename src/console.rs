//! Handling the CLI
//!
//! This module handles the command line parsing as well as the interactive session in which a user assembles an
//! [`OpticalSystem`] component by component and propagates rays through it. All handlers only use the public
//! interface of the optics model and print its results (or errors).
use crate::{
    components::ComponentKind,
    document::{SystemDocument, FILE_EXTENSION},
    error::{OpticsError, OptResult},
    get_version, OpticalSystem, RayState,
};
use clap::{builder::Str, Parser};
use log::info;
use rprompt::prompt_reply_from_bufread;
use std::{
    ffi::OsStr,
    io::{stdin, stdout, BufRead, BufReader, Write},
    path::{Path, PathBuf},
};
use strum::IntoEnumIterator;

/// Number of consecutive invalid inputs accepted before giving up.
const MAX_INVALID_INPUTS: usize = 3;

/// Command line arguments of the application.
pub struct Args {
    /// file path of an optical system, which should be read in
    pub file_path: Option<PathBuf>,
    /// incoming ray
    pub beam: Option<RayState>,
    /// print system, system matrix and propagated ray without starting an interactive session
    pub batch: bool,
}

#[derive(Parser)]
#[command(author, version = Str::from(get_version()), about, long_about = None)]
pub struct PartialArgs {
    /// file path of an optical system (.ron) to read in
    #[arg(short, long)]
    file_path: Option<String>,

    /// height of the incoming ray
    #[arg(long, allow_hyphen_values = true)]
    height: Option<String>,

    /// angle of the incoming ray
    #[arg(long, allow_hyphen_values = true)]
    angle: Option<String>,

    /// do not start an interactive session, only propagate the ray through the system
    #[arg(short, long)]
    batch: bool,
}

/// Checks if the passed file path is valid.
/// # Attributes
/// * `path`: Path to the file
/// # Returns
/// Returns True if the file exists and has the system file extension, false otherwise
fn file_path_is_valid(path: &Path) -> bool {
    Path::exists(path)
        && Path::is_file(path)
        && path.extension() == Some(OsStr::new(FILE_EXTENSION))
}

fn eval_file_path_input(file_path: &str) -> Option<PathBuf> {
    let path = Path::new(file_path.trim());
    file_path_is_valid(path).then(|| path.to_path_buf())
}

fn eval_number_input(number: &str) -> Option<f64> {
    number.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Creates the prompt string that is displayed in the console, depending on the flag.
/// # Attributes
/// * `flag`:       Respective argument flag. "f" for file path of the optical system, "h" for the ray height and "a"
///                 for the ray angle.
/// * `init_str`:   Prepended String. Used if some messages schould be displayed beforehand.
/// # Errors
/// Errors if an invalid flag type has been used
fn create_prompt_str(flag: &str, init_str: &str) -> OptResult<String> {
    let prompt_str = init_str.to_owned();
    match flag {
        "f" => Ok(prompt_str + "Please insert path to the optical system file (.ron):\n"),
        "h" => Ok(prompt_str + "Please insert the height of the incoming ray:\n"),
        "a" => Ok(prompt_str + "Please insert the angle of the incoming ray:\n"),
        _ => Err(OpticsError::Console(
            "Invalid flag type! Cannot create prompt string!".into(),
        )),
    }
}

fn read_reply(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    prompt: &str,
) -> OptResult<String> {
    prompt_reply_from_bufread(reader, writer, prompt)
        .map_err(|e| OpticsError::Console(format!("cannot read input: {e}")))
}

/// Extracts an argument, prompting the user until a valid value is given.
/// # Attributes
/// * `func`:       Function to evaluate the input string of the given argument.
/// * `input`:      String-Option of the argument
/// * `arg_flag`:   Respective argument flag (see [`create_prompt_str`]).
/// * `reader`:     Type that implements the `BufRead` trait to read from. May be stdin().lock() for user input or a
///                 `BufReader` from a static String for tests
/// * `writer`:     Type  that implements the Write trait to write into.
/// # Errors
/// Returns an [`OpticsError::Console`] after too many invalid inputs or if reading fails.
fn get_args<T>(
    func: fn(&str) -> Option<T>,
    input: Option<&str>,
    arg_flag: &str,
    reader: &mut impl BufRead,
    writer: &mut impl Write,
) -> OptResult<T> {
    let mut input = input.map(str::to_owned);
    let mut invalid_inputs = 0;
    loop {
        let init_str = match input.as_deref() {
            Some(i) => {
                if let Some(arg) = func(i) {
                    return Ok(arg);
                }
                invalid_inputs += 1;
                if invalid_inputs >= MAX_INVALID_INPUTS {
                    return Err(OpticsError::Console(
                        "Too many invalid inputs! Please type \"abcd_optics -h\" for help!".into(),
                    ));
                }
                "Invalid input!\n"
            }
            None => "",
        };
        let prompt_str = create_prompt_str(arg_flag, init_str)?;
        input = Some(read_reply(reader, writer, &prompt_str)?);
    }
}

impl Args {
    /// Complete the given [`PartialArgs`] by asking for missing or invalid values.
    ///
    /// # Errors
    ///
    /// This function will return an error if too many invalid inputs were given.
    pub fn from_partial_args(
        part_args: PartialArgs,
        reader: &mut impl BufRead,
        writer: &mut impl Write,
    ) -> OptResult<Self> {
        let file_path = if part_args.file_path.is_some() || part_args.batch {
            Some(get_args(
                eval_file_path_input,
                part_args.file_path.as_deref(),
                "f",
                reader,
                writer,
            )?)
        } else {
            None
        };
        let beam = if part_args.height.is_some() || part_args.angle.is_some() || part_args.batch {
            let height = get_args(
                eval_number_input,
                part_args.height.as_deref(),
                "h",
                reader,
                writer,
            )?;
            let angle = get_args(
                eval_number_input,
                part_args.angle.as_deref(),
                "a",
                reader,
                writer,
            )?;
            Some(RayState::new(height, angle)?)
        } else {
            None
        };
        Ok(Self {
            file_path,
            beam,
            batch: part_args.batch,
        })
    }
}
impl TryFrom<PartialArgs> for Args {
    type Error = OpticsError;

    fn try_from(part_args: PartialArgs) -> OptResult<Self> {
        let mut reader = BufReader::new(stdin().lock());
        let mut writer = stdout().lock();
        Self::from_partial_args(part_args, &mut reader, &mut writer)
    }
}

/// Returns the key which selects the given component kind in the session menu.
#[must_use]
pub const fn menu_key(kind: ComponentKind) -> &'static str {
    match kind {
        ComponentKind::FreeSpace => "fs",
        ComponentKind::PlanarBoundary => "pb",
        ComponentKind::SphericalBoundary => "sb",
        ComponentKind::ThinLens => "tl",
        ComponentKind::PlanarMirror => "pm",
        ComponentKind::SphericalMirror => "sm",
        ComponentKind::ThickLens => "kl",
    }
}

fn create_menu_str() -> String {
    let mut menu = String::from("\nPlease choose an action:\n");
    for kind in ComponentKind::iter() {
        menu += &format!("{: <3}add {kind}\n", menu_key(kind));
    }
    menu + "p  propagate a ray\n"
        + "m  show the system matrix\n"
        + "c  clear the system\n"
        + "s  show the system\n"
        + "w  write the system to a file\n"
        + "q  quit\n"
}

/// Ask for all parameters of the given kind and append the resulting component to the system.
///
/// An empty answer selects the default value of the parameter. On invalid input the system stays untouched.
///
/// # Errors
///
/// This function only returns an error if reading from the console failed.
pub fn add_component(
    system: &mut OpticalSystem,
    kind: ComponentKind,
    reader: &mut impl BufRead,
    writer: &mut impl Write,
) -> OptResult<String> {
    let mut values = Vec::with_capacity(kind.parameters().len());
    for parameter in kind.parameters() {
        let reply = read_reply(
            reader,
            writer,
            &format!(
                "{} [{}] (default {}):\n",
                parameter.description, parameter.key, parameter.default
            ),
        )?;
        if reply.trim().is_empty() {
            values.push(parameter.default);
        } else if let Ok(value) = reply.trim().parse::<f64>() {
            values.push(value);
        } else {
            return Ok(format!("Invalid input! '{}' is not a number", reply.trim()));
        }
    }
    match kind.build(&values) {
        Ok(component) => {
            system.add(component);
            Ok(system.to_string())
        }
        Err(e) => Ok(format!("Invalid input! {e}")),
    }
}

/// Ask for height and angle of a ray and propagate it through the system.
///
/// # Errors
///
/// This function only returns an error if reading from the console failed.
pub fn propagate_ray(
    system: &OpticalSystem,
    reader: &mut impl BufRead,
    writer: &mut impl Write,
) -> OptResult<String> {
    let height = read_reply(reader, writer, "ray height (default 0):\n")?;
    let angle = read_reply(reader, writer, "ray angle (default 0):\n")?;
    let or_zero = |s: &str| {
        if s.trim().is_empty() {
            "0".to_owned()
        } else {
            s.trim().to_owned()
        }
    };
    let ray = match format!("{}, {}", or_zero(&height), or_zero(&angle)).parse::<RayState>() {
        Ok(ray) => ray,
        Err(e) => return Ok(format!("Invalid input! {e}")),
    };
    Ok(propagation_report(system, &ray))
}

fn propagation_report(system: &OpticalSystem, ray: &RayState) -> String {
    match system.propagate(ray) {
        Ok(out) => format!("{ray} -> {out}"),
        Err(e) => format!("Error: {e}"),
    }
}

fn matrix_report(system: &OpticalSystem) -> String {
    match system.build_matrix() {
        Ok(m) => format!(
            "| {: >10.4} {: >10.4} |\n| {: >10.4} {: >10.4} |",
            m[(0, 0)],
            m[(0, 1)],
            m[(1, 0)],
            m[(1, 1)]
        ),
        Err(e) => format!("Error: {e}"),
    }
}

fn write_system(
    system: &OpticalSystem,
    reader: &mut impl BufRead,
    writer: &mut impl Write,
) -> OptResult<String> {
    let reply = read_reply(reader, writer, "Please insert the file path (.ron):\n")?;
    let mut path = PathBuf::from(reply.trim());
    if path.extension().is_none() {
        path.set_extension(FILE_EXTENSION);
    }
    let document = SystemDocument::new(system.clone());
    match document.save_to_file(&path) {
        Ok(()) => Ok(format!("System written to {}", path.display())),
        Err(e) => Ok(format!("Error: {e}")),
    }
}

fn write_line(writer: &mut impl Write, text: &str) -> OptResult<()> {
    writeln!(writer, "{text}")
        .and_then(|()| writer.flush())
        .map_err(|e| OpticsError::Console(format!("cannot write output: {e}")))
}

/// Run the interactive session on the given system until the user quits.
///
/// # Errors
///
/// This function will return an error if reading from or writing to the console fails.
pub fn run_session(
    system: &mut OpticalSystem,
    reader: &mut impl BufRead,
    writer: &mut impl Write,
) -> OptResult<()> {
    write_line(writer, &system.to_string())?;
    let menu = create_menu_str();
    loop {
        let command = read_reply(reader, writer, &menu)?;
        let command = command.trim();
        let response = if let Some(kind) = ComponentKind::iter().find(|k| menu_key(*k) == command) {
            add_component(system, kind, reader, writer)?
        } else {
            match command {
                "p" => propagate_ray(system, reader, writer)?,
                "m" => matrix_report(system),
                "c" => {
                    system.clear();
                    system.to_string()
                }
                "s" => system.to_string(),
                "w" => write_system(system, reader, writer)?,
                "q" => {
                    info!("session finished");
                    return Ok(());
                }
                _ => format!("Invalid input! '{command}' is not a menu entry"),
            }
        };
        write_line(writer, &response)?;
    }
}

/// Print the system, its matrix and the propagated ray.
///
/// # Errors
///
/// This function will return an error if writing to the console fails or if the system is empty.
pub fn run_batch(system: &OpticalSystem, ray: &RayState, writer: &mut impl Write) -> OptResult<()> {
    write_line(writer, &system.to_string())?;
    system.build_matrix()?;
    write_line(writer, &matrix_report(system))?;
    let out = system.propagate(ray)?;
    write_line(writer, &format!("{ray} -> {out}"))
}

/// Creates the intro text with the version information.
#[must_use]
fn create_intro() -> String {
    format!(
        "{: ^79}\n{: ^79}\n",
        "Paraxial optics with ray-transfer matrices",
        format!("version {}", get_version())
    )
}

/// Show the intro text and the version information.
pub fn show_intro() {
    println!("{}", create_intro());
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::components::{FreeSpace, ThinLens};
    use std::io::BufReader;
    use tempfile::TempDir;

    fn lens_system() -> OpticalSystem {
        let mut system = OpticalSystem::default();
        system.add(FreeSpace::new(2.0).unwrap());
        system.add(ThinLens::new(5.0).unwrap());
        system
    }
    fn partial_args(
        file_path: Option<&str>,
        height: Option<&str>,
        angle: Option<&str>,
        batch: bool,
    ) -> PartialArgs {
        PartialArgs {
            file_path: file_path.map(str::to_owned),
            height: height.map(str::to_owned),
            angle: angle.map(str::to_owned),
            batch,
        }
    }
    fn system_file(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("system.ron");
        SystemDocument::new(lens_system()).save_to_file(&path).unwrap();
        path
    }
    #[test]
    fn file_path_is_valid_test() {
        let dir = TempDir::new().unwrap();
        let path_valid = system_file(&dir);
        let path_wrong_ext = dir.path().join("system.txt");
        std::fs::write(&path_wrong_ext, "").unwrap();
        assert!(file_path_is_valid(&path_valid));
        assert!(!file_path_is_valid(&path_wrong_ext));
        assert!(!file_path_is_valid(&dir.path().join("nonexistent.ron")));
        assert!(!file_path_is_valid(dir.path()));
    }
    #[test]
    fn eval_number_input_test() {
        assert_eq!(eval_number_input("1.5"), Some(1.5));
        assert_eq!(eval_number_input(" -0.2 "), Some(-0.2));
        assert_eq!(eval_number_input("abc"), None);
        assert_eq!(eval_number_input("inf"), None);
        assert_eq!(eval_number_input("NaN"), None);
    }
    #[test]
    fn create_prompt_str_test() {
        assert_eq!(
            create_prompt_str("f", "test_str\n").unwrap(),
            "test_str\nPlease insert path to the optical system file (.ron):\n"
        );
        assert_eq!(
            create_prompt_str("h", "").unwrap(),
            "Please insert the height of the incoming ray:\n"
        );
        assert!(create_prompt_str("invalid_flag", "").is_err());
    }
    #[test]
    fn get_args_reprompt() {
        let mut reader = BufReader::new("2.5\n".as_bytes());
        let mut writer = Vec::<u8>::new();
        let value = get_args(eval_number_input, Some("x"), "h", &mut reader, &mut writer).unwrap();
        assert_eq!(value, 2.5);
        let output = String::from_utf8(writer).unwrap();
        assert!(output.starts_with("Invalid input!\nPlease insert the height"));
    }
    #[test]
    fn get_args_too_many_invalid() {
        let mut reader = BufReader::new("x\ny\nz\n".as_bytes());
        let mut writer = Vec::<u8>::new();
        assert!(matches!(
            get_args(eval_number_input, Some("w"), "h", &mut reader, &mut writer),
            Err(OpticsError::Console(_))
        ));
    }
    #[test]
    fn args_without_options() {
        let mut reader = BufReader::new("".as_bytes());
        let mut writer = Vec::<u8>::new();
        let args = Args::from_partial_args(
            partial_args(None, None, None, false),
            &mut reader,
            &mut writer,
        )
        .unwrap();
        assert!(args.file_path.is_none());
        assert!(args.beam.is_none());
        assert!(!args.batch);
    }
    #[test]
    fn args_batch_prompts_missing_values() {
        let dir = TempDir::new().unwrap();
        let path = system_file(&dir);
        let input = format!("{}\n1.0\n", path.display());
        let mut reader = BufReader::new(input.as_bytes());
        let mut writer = Vec::<u8>::new();
        let args = Args::from_partial_args(
            partial_args(None, None, Some("-0.1"), true),
            &mut reader,
            &mut writer,
        )
        .unwrap();
        assert_eq!(args.file_path, Some(path));
        assert_eq!(args.beam, Some(RayState::new(1.0, -0.1).unwrap()));
        assert!(args.batch);
    }
    #[test]
    fn menu() {
        let menu = create_menu_str();
        assert!(menu.contains("fs add FreeSpace\n"));
        assert!(menu.contains("kl add ThickLens\n"));
        assert!(menu.ends_with("q  quit\n"));
    }
    #[test]
    fn add_component_with_defaults() {
        let mut system = OpticalSystem::default();
        let mut reader = BufReader::new("\n1.5\n".as_bytes());
        let mut writer = Vec::<u8>::new();
        let response =
            add_component(&mut system, ComponentKind::PlanarBoundary, &mut reader, &mut writer)
                .unwrap();
        assert_eq!(response, "OpticalSystem([PlanarBoundary(n1 = 1.003, n2 = 1.5)])");
        assert_eq!(system.len(), 1);
    }
    #[test]
    fn add_component_invalid() {
        let mut system = OpticalSystem::default();
        let mut reader = BufReader::new("five\n".as_bytes());
        let mut writer = Vec::<u8>::new();
        let response =
            add_component(&mut system, ComponentKind::ThinLens, &mut reader, &mut writer).unwrap();
        assert!(response.starts_with("Invalid input!"));
        let mut reader = BufReader::new("0\n".as_bytes());
        let response =
            add_component(&mut system, ComponentKind::ThinLens, &mut reader, &mut writer).unwrap();
        assert!(response.starts_with("Invalid input! DegenerateParameter"));
        assert!(system.is_empty());
    }
    #[test]
    fn propagate_ray_test() {
        let mut reader = BufReader::new("1\n\n".as_bytes());
        let mut writer = Vec::<u8>::new();
        let response = propagate_ray(&lens_system(), &mut reader, &mut writer).unwrap();
        assert_eq!(
            response,
            "(height = 1, angle = 0) -> (height = 1, angle = -0.2)"
        );
    }
    #[test]
    fn propagate_ray_empty_system() {
        let mut reader = BufReader::new("1\n0\n".as_bytes());
        let mut writer = Vec::<u8>::new();
        let response = propagate_ray(&OpticalSystem::default(), &mut reader, &mut writer).unwrap();
        assert!(response.starts_with("Error: EmptySystem"));
    }
    #[test]
    fn session() {
        let mut system = OpticalSystem::default();
        let mut reader = BufReader::new("fs\n2\ntl\n5\nx\np\n1\n0\nm\nc\nq\n".as_bytes());
        let mut writer = Vec::<u8>::new();
        run_session(&mut system, &mut reader, &mut writer).unwrap();
        let output = String::from_utf8(writer).unwrap();
        assert!(output.contains("OpticalSystem([FreeSpace(d = 2), ThinLens(f = 5)])"));
        assert!(output.contains("Invalid input! 'x' is not a menu entry"));
        assert!(output.contains("-> (height = 1, angle = -0.2)"));
        assert!(output.contains("|     1.0000     2.0000 |"));
        assert!(output.contains("OpticalSystem([])"));
        assert!(system.is_empty());
    }
    #[test]
    fn session_write_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("written");
        let mut system = lens_system();
        let input = format!("w\n{}\nq\n", path.display());
        let mut reader = BufReader::new(input.as_bytes());
        let mut writer = Vec::<u8>::new();
        run_session(&mut system, &mut reader, &mut writer).unwrap();
        let loaded = SystemDocument::from_file(&path.with_extension("ron")).unwrap();
        assert_eq!(loaded.system(), &lens_system());
    }
    #[test]
    fn batch() {
        let mut writer = Vec::<u8>::new();
        run_batch(
            &lens_system(),
            &RayState::new(1.0, 0.0).unwrap(),
            &mut writer,
        )
        .unwrap();
        let output = String::from_utf8(writer).unwrap();
        assert!(output.starts_with("OpticalSystem([FreeSpace(d = 2), ThinLens(f = 5)])\n"));
        assert!(output.ends_with("(height = 1, angle = 0) -> (height = 1, angle = -0.2)\n"));
    }
    #[test]
    fn batch_empty_system() {
        let mut writer = Vec::<u8>::new();
        assert!(matches!(
            run_batch(&OpticalSystem::default(), &RayState::default(), &mut writer),
            Err(OpticsError::EmptySystem(_))
        ));
    }
    #[test]
    fn intro() {
        let intro = create_intro();
        assert!(intro.contains("Paraxial optics with ray-transfer matrices"));
        assert!(intro.contains(&get_version()));
    }
}
