//! Emission formulas, one per category. Every function returns metric tonnes
//! of CO2E per year and performs no range checking: negative inputs give
//! negative footprints.

use crate::conversion::{
    daily_to_annual, grams_to_tonnes, kg_to_tonnes, km_to_miles, kwh_to_mwh, pounds_to_kg,
    weekly_to_daily,
};

// Utilities
const HYDRO_KG_PER_MWH: f64 = 0.6;
const GAS_POUNDS_PER_MONTHLY_DOLLAR: f64 = 105.0;

// University
const CREDITS_PER_FULL_TIME_STUDENT: f64 = 30.0;
const TONNES_PER_FULL_TIME_STUDENT: f64 = 1.12;

// Computing
const ONLINE_GRAMS_PER_HOUR: f64 = 55.0;
const PHONE_KG_PER_DAILY_HOUR: f64 = 1250.0;
const LIGHT_DEVICE_KG: f64 = 75.0;
const MEDIUM_DEVICE_KG: f64 = 200.0;
const HEAVY_DEVICE_KG: f64 = 800.0;

// Diet, all in grams of CO2E per day
const VEGAN_BASELINE_GRAMS: f64 = 2890.0;
const GRAMS_PER_GRAM_MEAT: f64 = 26.8;
const GRAMS_PER_GRAM_CHEESE: f64 = 12.0;
const GRAMS_PER_LITRE_MILK: f64 = 267.7777;
const GRAMS_PER_EGG: f64 = 300.0;

// Transportation
const KM_PER_TRANSIT_TRIP: f64 = 7.7;
const BUS_GRAMS_PER_MILE: f64 = 150.0;
const RAIL_GRAMS_PER_MILE: f64 = 160.0;
const DRIVING_POUNDS_PER_MILE: f64 = 0.79;
const RIDE_HAIL_SURVEY_TRIPS: f64 = 81_000_000.0;
const RIDE_HAIL_SURVEY_TONNES: f64 = 100_000.0;

// Travel
const LONG_FLIGHT_POUNDS: f64 = 4400.0;
const SHORT_FLIGHT_POUNDS: f64 = 1100.0;
const TRAIN_RIDE_KG: f64 = 34.45;
const COACH_RIDE_KG: f64 = 33.0;
const HOTEL_GRAMS_PER_DOLLAR: f64 = 270.0;

/// Annual footprint of electricity at 0.6 kg CO2E per MWh of hydro power.
pub fn fp_from_hydro(daily_kwh: f64) -> f64 {
    let daily_mwh = kwh_to_mwh(daily_kwh);
    let daily_tonnes = kg_to_tonnes(daily_mwh * HYDRO_KG_PER_MWH);
    daily_to_annual(daily_tonnes)
}

/// Annual footprint of natural gas: the monthly bill in dollars times 105
/// gives pounds of CO2E per year.
pub fn fp_from_gas(monthly_dollars: f64) -> f64 {
    let annual_pounds = monthly_dollars * GAS_POUNDS_PER_MONTHLY_DOLLAR;
    kg_to_tonnes(pounds_to_kg(annual_pounds))
}

pub fn fp_of_utilities(daily_hydro_kwh: f64, monthly_gas_dollars: f64) -> f64 {
    fp_from_hydro(daily_hydro_kwh) + fp_from_gas(monthly_gas_dollars)
}

/// 1.12 tonnes per full-time (30 credit) student.
pub fn fp_of_studies(annual_credits: f64) -> f64 {
    let full_time_students = annual_credits / CREDITS_PER_FULL_TIME_STUDENT;
    full_time_students * TONNES_PER_FULL_TIME_STUDENT
}

/// Online and phone use are daily hours; devices are counts bought this year,
/// from small (phone, tablet) through laptop to workstation.
pub fn fp_of_computing(
    daily_online_hours: f64,
    daily_phone_hours: f64,
    light_devices: f64,
    medium_devices: f64,
    heavy_devices: f64,
) -> f64 {
    let online_tonnes =
        daily_to_annual(grams_to_tonnes(daily_online_hours * ONLINE_GRAMS_PER_HOUR));
    let phone_tonnes = kg_to_tonnes(daily_phone_hours * PHONE_KG_PER_DAILY_HOUR);
    let light_tonnes = kg_to_tonnes(light_devices * LIGHT_DEVICE_KG);
    let medium_tonnes = kg_to_tonnes(medium_devices * MEDIUM_DEVICE_KG);
    let heavy_tonnes = kg_to_tonnes(heavy_devices * HEAVY_DEVICE_KG);

    online_tonnes + phone_tonnes + light_tonnes + medium_tonnes + heavy_tonnes
}

/// Daily consumption on top of a vegan baseline of 2.89 kg CO2E per day.
/// Dairy other than milk and cheese is not counted.
pub fn fp_of_diet(
    daily_meat_g: f64,
    daily_cheese_g: f64,
    daily_milk_l: f64,
    daily_eggs: f64,
) -> f64 {
    let daily_grams = VEGAN_BASELINE_GRAMS
        + daily_meat_g * GRAMS_PER_GRAM_MEAT
        + daily_cheese_g * GRAMS_PER_GRAM_CHEESE
        + daily_milk_l * GRAMS_PER_LITRE_MILK
        + daily_eggs * GRAMS_PER_EGG;

    grams_to_tonnes(daily_to_annual(daily_grams))
}

fn weekly_transit_tonnes(weekly_bus_trips: f64, weekly_rail_trips: f64) -> f64 {
    let bus_miles = km_to_miles(weekly_bus_trips * KM_PER_TRANSIT_TRIP);
    let rail_miles = km_to_miles(weekly_rail_trips * KM_PER_TRANSIT_TRIP);

    grams_to_tonnes(bus_miles * BUS_GRAMS_PER_MILE)
        + grams_to_tonnes(rail_miles * RAIL_GRAMS_PER_MILE)
}

fn driving_tonnes(km: f64) -> f64 {
    let pounds = km_to_miles(km) * DRIVING_POUNDS_PER_MILE;
    kg_to_tonnes(pounds_to_kg(pounds))
}

fn weekly_ride_hail_tonnes(weekly_rides: f64) -> f64 {
    weekly_rides / RIDE_HAIL_SURVEY_TRIPS * RIDE_HAIL_SURVEY_TONNES
}

fn weekly_to_annual_tonnes(weekly_tonnes: f64) -> f64 {
    daily_to_annual(weekly_to_daily(weekly_tonnes))
}

/// Annual footprint of driving `annual_km` kilometres at 0.79 lb per mile.
pub fn fp_from_driving(annual_km: f64) -> f64 {
    driving_tonnes(annual_km)
}

/// Ride-hail footprint scaled from 81 million trips producing 100,000 tonnes.
pub fn fp_from_taxi_uber(weekly_rides: f64) -> f64 {
    weekly_to_annual_tonnes(weekly_ride_hail_tonnes(weekly_rides))
}

/// Public transit, assuming an average trip of 7.7 km.
pub fn fp_from_transit(weekly_bus_trips: f64, weekly_rail_trips: f64) -> f64 {
    weekly_to_annual_tonnes(weekly_transit_tonnes(weekly_bus_trips, weekly_rail_trips))
}

pub fn fp_of_transportation(
    weekly_bus_trips: f64,
    weekly_rail_trips: f64,
    weekly_ride_hail_trips: f64,
    weekly_km_driven: f64,
) -> f64 {
    let weekly_tonnes = weekly_transit_tonnes(weekly_bus_trips, weekly_rail_trips)
        + driving_tonnes(weekly_km_driven)
        + weekly_ride_hail_tonnes(weekly_ride_hail_trips);

    weekly_to_annual_tonnes(weekly_tonnes)
}

/// Annual counts of long (over 4 hours) and short flights, intercity train and
/// coach rides, plus hotel spending in dollars.
pub fn fp_of_travel(
    long_flights: f64,
    short_flights: f64,
    train_rides: f64,
    coach_rides: f64,
    hotel_dollars: f64,
) -> f64 {
    let long_flight_tonnes = kg_to_tonnes(pounds_to_kg(long_flights * LONG_FLIGHT_POUNDS));
    let short_flight_tonnes = kg_to_tonnes(pounds_to_kg(short_flights * SHORT_FLIGHT_POUNDS));
    let train_tonnes = kg_to_tonnes(train_rides * TRAIN_RIDE_KG);
    let coach_tonnes = kg_to_tonnes(coach_rides * COACH_RIDE_KG);
    let hotel_tonnes = grams_to_tonnes(hotel_dollars * HOTEL_GRAMS_PER_DOLLAR);

    long_flight_tonnes + short_flight_tonnes + train_tonnes + coach_tonnes + hotel_tonnes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round4(value: f64) -> f64 {
        (value * 10000.0).round() / 10000.0
    }

    #[test]
    fn test_zero_inputs() {
        assert_eq!(fp_of_utilities(0.0, 0.0), 0.0);
        assert_eq!(fp_of_studies(0.0), 0.0);
        assert_eq!(fp_of_computing(0.0, 0.0, 0.0, 0.0, 0.0), 0.0);
        assert_eq!(fp_of_transportation(0.0, 0.0, 0.0, 0.0), 0.0);
        assert_eq!(fp_of_travel(0.0, 0.0, 0.0, 0.0, 0.0), 0.0);

        // A vegan diet still has a footprint
        assert_eq!(round4(fp_of_diet(0.0, 0.0, 0.0, 0.0)), 1.0556);
    }

    #[test]
    fn test_utilities() {
        assert_eq!(round4(fp_from_hydro(10.0)), 0.0022);
        assert_eq!(round4(fp_from_hydro(48.8)), 0.0107);
        assert_eq!(round4(fp_from_gas(100.0)), 4.7627);
        assert_eq!(round4(fp_from_gas(25.0)), 1.1907);

        assert_eq!(round4(fp_of_utilities(100.0, 0.0)), 0.0219);
        assert_eq!(round4(fp_of_utilities(0.0, 100.0)), 4.7627);
        assert_eq!(round4(fp_of_utilities(50.0, 20.0)), 0.9635);
    }

    #[test]
    fn test_studies() {
        assert_eq!(round4(fp_of_studies(30.0)), 1.12);
        assert_eq!(round4(fp_of_studies(18.0)), 0.672);
    }

    #[test]
    fn test_computing() {
        assert_eq!(round4(fp_of_computing(6.0, 0.0, 0.0, 0.0, 0.0)), 0.1205);
        assert_eq!(round4(fp_of_computing(0.0, 1.0, 0.0, 0.0, 0.0)), 1.25);
        assert_eq!(round4(fp_of_computing(0.0, 0.0, 1.0, 0.0, 0.0)), 0.075);
        assert_eq!(round4(fp_of_computing(0.0, 0.0, 0.0, 1.0, 0.0)), 0.2);
        assert_eq!(round4(fp_of_computing(0.0, 0.0, 0.0, 0.0, 1.0)), 0.8);
        assert_eq!(round4(fp_of_computing(4.0, 2.0, 2.0, 1.0, 1.0)), 3.7304);
    }

    #[test]
    fn test_diet() {
        assert_eq!(round4(fp_of_diet(0.0, 0.0, 0.0, 1.0)), 1.1651);
        assert_eq!(round4(fp_of_diet(0.0, 0.0, 1.0, 0.0)), 1.1534);
        assert_eq!(round4(fp_of_diet(0.0, 0.0, 1.0, 1.0)), 1.2629);
        assert_eq!(round4(fp_of_diet(0.0, 10.0, 0.0, 0.0)), 1.0994);
        assert_eq!(round4(fp_of_diet(0.0, 293.52, 1.0, 1.0)), 2.5494);
        assert_eq!(round4(fp_of_diet(25.0, 0.0, 0.0, 0.0)), 1.3003);
        assert_eq!(round4(fp_of_diet(25.0, 293.52, 1.0, 1.0)), 2.7941);
        assert_eq!(round4(fp_of_diet(126.0, 293.52, 1.0, 1.0)), 3.7827);
    }

    #[test]
    fn test_transportation_sources() {
        assert_eq!(fp_from_driving(0.0), 0.0);
        assert_eq!(round4(fp_from_driving(100.0)), 0.0223);
        assert_eq!(round4(fp_from_driving(1234.0)), 0.2748);

        assert_eq!(fp_from_taxi_uber(0.0), 0.0);
        assert_eq!(round4(fp_from_taxi_uber(10.0)), 0.6442);
        assert_eq!(round4(fp_from_taxi_uber(25.0)), 1.6104);

        assert_eq!(fp_from_transit(0.0, 0.0), 0.0);
        assert_eq!(round4(fp_from_transit(1.0, 0.0)), 0.0374);
        assert_eq!(round4(fp_from_transit(0.0, 1.0)), 0.0399);
        assert_eq!(round4(fp_from_transit(10.0, 2.0)), 0.4544);
    }

    #[test]
    fn test_transportation() {
        assert_eq!(round4(fp_of_transportation(2.0, 2.0, 1.0, 10.0)), 0.3354);
    }

    #[test]
    fn test_travel() {
        assert_eq!(round4(fp_of_travel(0.0, 1.0, 0.0, 0.0, 0.0)), 0.499);
        assert_eq!(round4(fp_of_travel(1.0, 0.0, 0.0, 0.0, 0.0)), 1.9958);
        assert_eq!(round4(fp_of_travel(2.0, 2.0, 0.0, 0.0, 0.0)), 4.9895);
        assert_eq!(round4(fp_of_travel(0.0, 0.0, 1.0, 0.0, 0.0)), 0.0345);
        assert_eq!(round4(fp_of_travel(0.0, 0.0, 0.0, 1.0, 0.0)), 0.033);
        assert_eq!(round4(fp_of_travel(0.0, 0.0, 0.0, 0.0, 100.0)), 0.027);
        assert_eq!(round4(fp_of_travel(6.0, 4.0, 24.0, 2.0, 2000.0)), 15.4034);
        assert_eq!(round4(fp_of_travel(1.0, 2.0, 3.0, 4.0, 5.0)), 3.2304);
    }

    #[test]
    fn test_negative_inputs_are_not_rejected() {
        assert!(fp_of_studies(-30.0) < 0.0);
        assert!(fp_of_travel(-1.0, 0.0, 0.0, 0.0, 0.0) < 0.0);
    }
}
