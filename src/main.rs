//! Interactive menu for the sarf morphology engine: tree visualization,
//! derivation generation, word validation and scheme management. All state
//! lives in a single [`Session`] constructed at startup; this binary only
//! drives it.

use std::fs;
use std::io::{self, Write};

use config::Config;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sarf::error::{Result, SarfError};
use sarf::interface::Session;
use sarf::lexicon::TreeSnapshot;

const DEFAULT_ROOTS: [&str; 7] = ["كتب", "درس", "عمل", "قول", "ردد", "رمي", "أكل"];

const SEED_SCHEMES: [(&str, &str); 7] = [
    ("اسم فاعل", "فَاعِل"),
    ("اسم مفعول", "مَفْعُول"),
    ("المصدر", "اِفْتِعَال"),
    ("الماضي", "فَعَلَ"),
    ("المضارع", "يَفْعَلُ"),
    ("اسم المكان", "مَفْعَل"),
    ("الطلب", "اِسْتِفْعَال"),
];

const BOLD: &str = "\x1b[1m";
const CYAN: &str = "\x1b[1;36m";
const YELLOW: &str = "\x1b[1;33m";
const GREEN: &str = "\x1b[1;32m";
const RED: &str = "\x1b[1;31m";
const MAGENTA: &str = "\x1b[1;35m";
const RESET: &str = "\x1b[0m";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = Config::builder()
        .add_source(config::File::with_name("sarf").required(false))
        .add_source(config::Environment::with_prefix("SARF"))
        .build()
        .map_err(|e| SarfError::Config(e.to_string()))?;
    let roots_file = settings
        .get_string("roots_file")
        .unwrap_or_else(|_| String::from("racines.txt"));

    let mut session = Session::new();
    match fs::read_to_string(&roots_file) {
        Ok(text) => {
            info!(file = %roots_file, "seeding roots from file");
            session.seed_roots(
                text.lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(String::from),
            );
        }
        Err(e) => {
            warn!(file = %roots_file, error = %e, "roots file missing, seeding defaults");
            session.seed_roots(DEFAULT_ROOTS.iter().map(|root| root.to_string()));
        }
    }
    session.seed_schemes(SEED_SCHEMES);

    loop {
        clear_screen();
        print_header();
        println!("\n{BOLD}[1]{RESET} عرض هيكل الجذور (Tree Visualizer)");
        println!("{BOLD}[2]{RESET} توليد اشتقاق جديد (Derivation Generator)");
        println!("{BOLD}[3]{RESET} تحليل كلمة (Morphological Validator)");
        println!("{BOLD}[4]{RESET} إضافة جذر جديد (Add Root)");
        println!("{BOLD}[5]{RESET} إدارة الأوزان (Scheme Management)");
        println!("{BOLD}[6]{RESET} تصدير الشجرة (JSON Export)");
        println!("{BOLD}[0]{RESET} خروج (Exit)");
        match prompt("\nاختر الخيار المناسب: ")?.as_str() {
            "1" => view_tree(&session)?,
            "2" => generate(&mut session)?,
            "3" => validate_word(&mut session)?,
            "4" => add_root(&mut session)?,
            "5" => manage_schemes(&mut session)?,
            "6" => export_snapshot(&session)?,
            "0" => break,
            _ => continue,
        }
    }
    println!("\nشكرًا لاستخدامك المُصَرِّف المَشْكُول. وداعاً!");
    Ok(())
}

fn clear_screen() {
    print!("\x1b[2J\x1b[1;1H");
}

fn print_header() {
    println!("{CYAN}{}{RESET}", "=".repeat(60));
    println!("{YELLOW}          المُصَرِّف المَشْكُول الذكي{RESET}");
    println!("{CYAN}{}{RESET}", "=".repeat(60));
}

fn prompt(message: &str) -> Result<String> {
    print!("{MAGENTA}{message}{RESET}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

fn pause() -> Result<()> {
    let _ = prompt("\nاضغط Enter للعودة...")?;
    Ok(())
}

// Text rendering of the tree, right subtree above the node and left below.
fn print_tree(node: &TreeSnapshot, prefix: &str, is_left: bool) {
    if let Some(right) = &node.right {
        let deeper = format!("{prefix}{}", if is_left { "│   " } else { "    " });
        print_tree(right, &deeper, false);
    }
    let branch = if is_left { "└── " } else { "┌── " };
    println!("{prefix}{branch}{GREEN}{}{RESET}", node.root);
    if let Some(left) = &node.left {
        let deeper = format!("{prefix}{}", if is_left { "    " } else { "│   " });
        print_tree(left, &deeper, true);
    }
}

fn view_tree(session: &Session) -> Result<()> {
    clear_screen();
    print_header();
    println!("\n--- هيكل الجذور المحفوظة ---\n");
    match session.index().snapshot() {
        Some(snapshot) => print_tree(&snapshot, "", true),
        None => println!("المكتبة فارغة."),
    }
    pause()
}

fn generate(session: &mut Session) -> Result<()> {
    clear_screen();
    print_header();
    println!(
        "\n{BOLD}الجذور المتوفرة:{RESET} {}",
        session.index().roots().join(" | ")
    );
    let root = prompt("أدخل الجذر (مثلاً: كتب): ")?;

    let schemes = session.catalog().get_all();
    println!("\n{BOLD}الأوزان المتوفرة:{RESET}");
    for (i, scheme) in schemes.iter().enumerate() {
        println!("[{}] {scheme}", i + 1);
    }
    let choice = prompt("\nاختر رقم الوزن: ")?;
    let definite = prompt("هل تريد إضافة الـ التعريف؟ (ن/ل): ")? == "ن";

    let selected = choice
        .parse::<usize>()
        .ok()
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| schemes.get(i));
    match selected {
        Some(scheme) => match session.generate(&root, &scheme.name, definite) {
            Ok(word) => {
                println!("\n{}", "-".repeat(30));
                println!("الاشتقاق النهائي: {GREEN}{word}{RESET}");
                println!("{}", "-".repeat(30));
            }
            Err(e) => println!("\n{RED}خطأ: {e}{RESET}"),
        },
        None => println!("\n{RED}خطأ: اختيار غير صحيح.{RESET}"),
    }
    pause()
}

fn validate_word(session: &mut Session) -> Result<()> {
    clear_screen();
    print_header();
    println!("\n--- المحلل الصرفي ---");
    let word = prompt("أدخل الكلمة (مع التشكيل أو بدونه): ")?;
    let root = prompt("أدخل الجذر الثلاثي المتوقع: ")?;
    match session.analyze(&word, &root) {
        Some(scheme) => {
            println!("\n{GREEN}توافق صرفي ناجح!{RESET}");
            println!("الكلمة تتبع وزن: {BOLD}{scheme}{RESET}");
        }
        None => println!("\n{RED}لا يوجد توافق صرفي لهذه الكلمة مع هذا الجذر.{RESET}"),
    }
    pause()
}

fn add_root(session: &mut Session) -> Result<()> {
    let root = prompt("أدخل الجذر الجديد (3 أحرف): ")?;
    if root.chars().count() == 3 {
        session.index_mut().insert(&root, Vec::new());
        println!("{GREEN}تمت إضافة {root} إلى هيكل البيانات بنجاح.{RESET}");
    } else {
        println!("{RED}خطأ: يجب أن يتكون الجذر من 3 أحرف فقط.{RESET}");
    }
    pause()
}

fn manage_schemes(session: &mut Session) -> Result<()> {
    clear_screen();
    print_header();
    println!("\n{BOLD}الأوزان المسجلة:{RESET}");
    for (i, scheme) in session.catalog().get_all().iter().enumerate() {
        println!("[{}] {scheme}", i + 1);
    }
    println!("\n{BOLD}[1]{RESET} إضافة وزن");
    println!("{BOLD}[2]{RESET} تعديل وزن");
    println!("{BOLD}[3]{RESET} حذف وزن");
    println!("{BOLD}[0]{RESET} رجوع");
    match prompt("\nاختر: ")?.as_str() {
        "1" => {
            let name = prompt("اسم الوزن: ")?;
            let pattern = prompt("القالب (مثلاً: فَاعِل): ")?;
            session.catalog_mut().insert(&name, &pattern);
            println!("{GREEN}تمت الإضافة.{RESET}");
        }
        "2" => {
            let old_name = prompt("الاسم الحالي: ")?;
            let name = prompt("الاسم الجديد: ")?;
            let pattern = prompt("القالب الجديد: ")?;
            session.catalog_mut().update(&old_name, &name, &pattern);
            println!("{GREEN}تم التعديل.{RESET}");
        }
        "3" => {
            let name = prompt("اسم الوزن المحذوف: ")?;
            session.catalog_mut().remove(&name);
            println!("{GREEN}تم الحذف.{RESET}");
        }
        _ => return Ok(()),
    }
    pause()
}

fn export_snapshot(session: &Session) -> Result<()> {
    clear_screen();
    print_header();
    match session.index().snapshot() {
        Some(snapshot) => {
            let json =
                serde_json::to_string_pretty(&snapshot).map_err(|e| SarfError::Io(e.to_string()))?;
            println!("{json}");
        }
        None => println!("المكتبة فارغة."),
    }
    pause()
}
