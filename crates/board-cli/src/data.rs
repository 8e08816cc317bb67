//! The built-in dataset: the school's fixed weekly ASF timetable and the
//! standing student groups. Used whenever no `--schedule` file is given.

use board_engine::{Schedule, Student, WeeklySession};
use chrono::NaiveTime;

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid built-in time")
}

fn asf1() -> Vec<Student> {
    vec![
        Student::new("Richard", "6.1"),
        Student::new("Imran", "6.1"),
        Student::new("Albion", "7.2"),
        Student::new("Daniil", "7.2"),
    ]
}

fn asf2() -> Vec<Student> {
    vec![
        Student::new("Mohamed", "7.1"),
        Student::new("Artem", "7.1"),
        Student::new("Niiazkuly", "5a"),
        Student::new("Violetta", "5.1"),
        Student::new("Krisztian", "7.1"),
        Student::new("Neijla", "7.2"),
    ]
}

/// The standing "Sprachjongleure" language group, not bound to a slot.
pub fn sprachjongleure() -> Vec<Student> {
    vec![
        Student::new("Danilo", "5.1"),
        Student::new("Artur", "5.1"),
        Student::new("Samir", "5.1"),
        Student::new("Hristina", "5.1"),
        Student::new("Yevhen", "5.1"),
        Student::new("Alina", "6.1"),
        Student::new("Agnessa", "7.2"),
        Student::new("Mohammad", "7.2"),
    ]
}

fn slot(
    id: &str,
    label: &str,
    teacher: &str,
    day: u8,
    start: NaiveTime,
    end: NaiveTime,
    students: Vec<Student>,
) -> WeeklySession {
    WeeklySession {
        id: id.to_string(),
        label: label.to_string(),
        teacher: teacher.to_string(),
        room: "W204".to_string(),
        day,
        start,
        end,
        students,
    }
}

/// The full built-in weekly schedule. Days are 0–6 with 0 = Sunday.
pub fn default_schedule() -> Schedule {
    let sessions = vec![
        // Tun, ASF 1
        slot("tun-mo-34", "ASF 1", "Tun", 1, at(9, 50), at(11, 20), asf1()),
        slot("tun-mi-34", "ASF 1", "Tun", 3, at(9, 50), at(11, 20), asf1()),
        slot("tun-do-56", "ASF 1", "Tun", 4, at(11, 40), at(13, 10), asf1()),
        // Can, ASF 1
        slot("can-mo-12", "ASF 1", "Can", 1, at(8, 0), at(9, 30), asf1()),
        slot("can-di-34", "ASF 1", "Can", 2, at(9, 50), at(11, 20), asf1()),
        slot("can-fr-34", "ASF 1", "Can", 5, at(9, 50), at(11, 20), asf1()),
        // Woi, ASF 2
        slot("woi-mi-56", "ASF 2", "Woi", 3, at(11, 40), at(13, 10), asf2()),
        slot("woi-do-34", "ASF 2", "Woi", 4, at(9, 50), at(11, 20), asf2()),
        slot("woi-fr-12", "ASF 2", "Woi", 5, at(8, 0), at(9, 30), asf2()),
    ];
    Schedule::new(sessions).expect("built-in schedule is valid")
}
