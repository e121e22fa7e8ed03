use crate::operation::CompiledQuery;
use crate::operation::MethodInclude;
use crate::types::ObjectTypeBuilder;
use crate::types::ScalarKind;
use crate::types::TypeDescriptor;
use crate::types::TypeRegistry;
use crate::types::TypeRegistryBuilder;

fn string() -> TypeDescriptor {
    TypeDescriptor::scalar(ScalarKind::String)
}

fn list_of(type_name: &str) -> TypeDescriptor {
    TypeDescriptor::list(TypeDescriptor::object(type_name))
}

/// A small public-transit object model.
///
/// Leaf fields per type:
///   Agency:   gtfsId, name, url
///   Route:    gtfsId, shortName, mode
///   Trip:     gtfsId, tripHeadsign, directionId, geometry
///   Stoptime: scheduledArrival, headsign
///   Stop:     gtfsId, name, lat, lon
///   Alert:    (none)
pub(crate) fn transit_registry() -> TypeRegistry {
    TypeRegistryBuilder::new()
        .add_enum("Mode").unwrap()
        .add_object_type(
            ObjectTypeBuilder::new("Agency")
                .add_field("GtfsId", string()).unwrap()
                .add_field("Name", string()).unwrap()
                .add_field("Url", TypeDescriptor::optional(string())).unwrap()
                .add_field("Routes", list_of("Route")).unwrap()
                .build().unwrap(),
        ).unwrap()
        .add_object_type(
            ObjectTypeBuilder::new("Route")
                .add_field("GtfsId", string()).unwrap()
                .add_field("ShortName", TypeDescriptor::optional(string())).unwrap()
                .add_field("Mode", TypeDescriptor::enum_("Mode")).unwrap()
                .add_field("Agency", TypeDescriptor::object("Agency")).unwrap()
                .add_field("Trips", list_of("Trip")).unwrap()
                .add_field("TripsForDate", list_of("Trip")).unwrap()
                .add_field("Alerts", list_of("Alert")).unwrap()
                .build().unwrap(),
        ).unwrap()
        .add_object_type(
            ObjectTypeBuilder::new("Trip")
                .add_field("GtfsId", string()).unwrap()
                .add_field("TripHeadsign", TypeDescriptor::optional(string())).unwrap()
                .add_field(
                    "DirectionId",
                    TypeDescriptor::optional(TypeDescriptor::scalar(ScalarKind::Int)),
                ).unwrap()
                .add_field("Route", TypeDescriptor::object("Route")).unwrap()
                .add_field("StoptimesForDate", list_of("Stoptime")).unwrap()
                .add_field(
                    "Geometry",
                    TypeDescriptor::list(TypeDescriptor::list(
                        TypeDescriptor::scalar(ScalarKind::Float),
                    )),
                ).unwrap()
                .build().unwrap(),
        ).unwrap()
        .add_object_type(
            ObjectTypeBuilder::new("Stoptime")
                .add_field("ScheduledArrival", TypeDescriptor::scalar(ScalarKind::Int)).unwrap()
                .add_field("Headsign", TypeDescriptor::optional(string())).unwrap()
                .add_field("Stop", TypeDescriptor::optional(TypeDescriptor::object("Stop"))).unwrap()
                .build().unwrap(),
        ).unwrap()
        .add_object_type(
            ObjectTypeBuilder::new("Stop")
                .add_field("GtfsId", string()).unwrap()
                .add_field("Name", string()).unwrap()
                .add_field("Lat", TypeDescriptor::scalar(ScalarKind::Float)).unwrap()
                .add_field("Lon", TypeDescriptor::scalar(ScalarKind::Float)).unwrap()
                .add_field("Routes", list_of("Route")).unwrap()
                .build().unwrap(),
        ).unwrap()
        .add_object_type(
            ObjectTypeBuilder::new("Alert")
                .add_field("Route", TypeDescriptor::object("Route")).unwrap()
                .add_field("Stop", TypeDescriptor::optional(TypeDescriptor::object("Stop"))).unwrap()
                .build().unwrap(),
        ).unwrap()
        .build()
        .unwrap()
}

pub(crate) fn stoptimes_for_date(service_date: &str) -> MethodInclude {
    MethodInclude::new("StoptimesForDate", list_of("Stoptime"))
        .with_parameter("serviceDate", service_date)
}

pub(crate) fn trips_for_date(service_date: &str) -> MethodInclude {
    MethodInclude::new("TripsForDate", list_of("Trip"))
        .with_parameter("serviceDate", service_date)
}

/// Parse the compiled document to make sure it is syntactically valid
/// GraphQL.
pub(crate) fn assert_parses(compiled: &CompiledQuery) {
    if let Err(e) = graphql_parser::parse_query::<String>(compiled.document()) {
        panic!("compiled document failed to parse: {e}\n{}", compiled.document());
    }
}
