// Datos fijos del catálogo. El orden del Vec es el orden de `available_codes`.

use crate::models::{Course, Schedule, Section, SessionType, Weekday};

const FACULTY: &str = "College of Computing";
const CREDITS: &str = "3(2-2-5)";
const PROGRAM: &str = "Undergraduate (Regular)";
const YEAR: u16 = 2567;

fn course(
    code: &str,
    name_en: &str,
    name_th: &str,
    prerequisite: &str,
    semester: u8,
    sections: Vec<Section>,
) -> Course {
    Course {
        code: code.to_string(),
        name_en: name_en.to_string(),
        name_th: name_th.to_string(),
        faculty: FACULTY.to_string(),
        credits: CREDITS.to_string(),
        prerequisite: prerequisite.to_string(),
        semester,
        year: YEAR,
        program: PROGRAM.to_string(),
        sections,
    }
}

fn section(number: &str, seats: u32, instructor: &str, exam_date: &str, schedules: Vec<Schedule>) -> Section {
    Section {
        number: number.to_string(),
        seats,
        instructor: vec![instructor.to_string()],
        exam_date: exam_date.to_string(),
        schedules,
    }
}

pub(super) fn seed_courses() -> Vec<Course> {
    use SessionType::{Lab, Lecture};
    use Weekday::*;

    vec![
        course(
            "CP353004",
            "Software Engineering",
            "วิศวกรรมซอฟต์แวร์",
            "CP353002",
            1,
            vec![section(
                "02",
                40,
                "Assoc. Prof. Dr. Chitsutha Soomlek",
                "31 มี.ค. 2567 เวลา 13:00 - 16:00",
                vec![
                    Schedule::new(Monday, "15:00-17:00", "CP9127", Lecture),
                    Schedule::new(Wednesday, "13:00-15:00", "CP9127", Lab),
                ],
            )],
        ),
        course(
            "CP353002",
            "Object-Oriented Programming",
            "การเขียนโปรแกรมเชิงวัตถุ",
            "",
            1,
            vec![section(
                "01",
                60,
                "Dr. Somchai Prasit",
                "28 มี.ค. 2567 เวลา 09:00 - 12:00",
                vec![
                    Schedule::new(Tuesday, "09:00-11:00", "CP9101", Lecture),
                    Schedule::new(Thursday, "13:00-15:00", "CP9103", Lab),
                ],
            )],
        ),
        course(
            "CP353006",
            "Database Systems",
            "ระบบฐานข้อมูล",
            "CP353002",
            2,
            vec![section(
                "01",
                45,
                "Asst. Prof. Dr. Wanida Kanarkard",
                "30 มี.ค. 2567 เวลา 09:00 - 12:00",
                vec![
                    Schedule::new(Monday, "09:00-11:00", "CP9205", Lecture),
                    Schedule::new(Friday, "13:00-15:00", "CP9205", Lab),
                ],
            )],
        ),
    ]
}
